//! Filter and search engine.
//!
//! [`ListEngine`] mirrors the repository's full collection, keeps the search
//! phrase and filter set, and publishes two observable values:
//!
//! - the derived subset (`subscribe_items`)
//! - the display state (`subscribe_state`)
//!
//! # Binding
//!
//! The engine binds to the repository stream only after a successful
//! `initialize()`. From then on every repository replacement is picked up by
//! `sync()` (called at the start of every operation) or awaited with
//! `collection_changed()`.
//!
//! A failed `initialize()` does not bind, but still takes the provider's
//! current collection, so items recovered from the cache are shown under the
//! error.
//!
//! # Publishing
//!
//! The first derived subset is always published. Later recomputations are
//! published only when the result differs from the last published value.

use super::state::ListState;
use super::Router;
use crate::domain::{DisplayState, FilterAction, FilterPredicate, FilterSet, Item};
use crate::repository::DataProvider;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;

/// Engine deriving the displayed item list.
pub struct ListEngine {
    provider: Arc<dyn DataProvider>,
    router: Arc<dyn Router>,
    state: ListState,
    filter_labels: Vec<String>,
    binding: Option<watch::Receiver<Vec<Item>>>,
    items_tx: watch::Sender<Vec<Item>>,
    display_tx: watch::Sender<DisplayState>,
    published: bool,
}

impl ListEngine {
    /// Creates an unbound engine in the `Loading` state.
    pub fn new(provider: Arc<dyn DataProvider>, router: Arc<dyn Router>) -> Self {
        let (items_tx, _) = watch::channel(Vec::new());
        let (display_tx, _) = watch::channel(DisplayState::Loading);

        Self {
            provider,
            router,
            state: ListState::default(),
            filter_labels: FilterPredicate::canonical_labels(),
            binding: None,
            items_tx,
            display_tx,
            published: false,
        }
    }

    /// Loads the collection through the provider.
    ///
    /// Failures end up in [`DisplayState::Error`] and are not returned.
    pub async fn initialize(&mut self) {
        self.display_tx.send_replace(DisplayState::Loading);

        let outcome = self
            .provider
            .fetch_data()
            .instrument(tracing::debug_span!("initialize"))
            .await;

        match outcome {
            Ok(()) => {
                let mut receiver = self.provider.subscribe();
                self.state.items = receiver.borrow_and_update().clone();
                self.binding = Some(receiver);
                self.recompute();

                tracing::info!(count = self.state.items.len(), "item list loaded");
                self.display_tx.send_replace(DisplayState::Success);
            }
            Err(e) => {
                self.state.items = self.current_snapshot();
                self.recompute();

                tracing::warn!(error = %e, stale_count = self.state.items.len(), "failed to load item list");
                self.display_tx.send_replace(DisplayState::Error(e.to_string()));
            }
        }
    }

    /// Replaces the search phrase and recomputes.
    ///
    /// Returns true if the phrase or the derived subset changed.
    pub fn set_search(&mut self, phrase: impl Into<String>) -> bool {
        self.sync();

        let phrase = phrase.into();
        let phrase_changed = self.state.search_phrase != phrase;
        self.state.search_phrase = phrase;
        tracing::trace!(query = %self.state.search_phrase, "search phrase updated");

        self.recompute() || phrase_changed
    }

    /// Adds or removes the filter behind `label` and recomputes.
    ///
    /// Unknown labels are ignored. Returns true if the filter set or the
    /// derived subset changed.
    pub fn toggle_filter(&mut self, label: &str, action: FilterAction) -> bool {
        self.sync();

        let filters_changed = self.state.toggle_filter(label, action);
        self.recompute() || filters_changed
    }

    /// Clears the search phrase and every filter.
    pub fn reset_filters(&mut self) -> bool {
        self.sync();

        let had_inputs = !self.state.search_phrase.is_empty() || !self.state.filters.is_empty();
        self.state.reset();
        self.recompute() || had_inputs
    }

    /// Forwards `item` to the router.
    pub fn select_item(&mut self, item: &Item) {
        self.sync();

        tracing::debug!(name = %item.name, symbol = %item.symbol, "item selected");
        self.router.route_to_detail(item);
    }

    /// Item at `index` in the derived subset.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.state.filtered_items.get(index)
    }

    /// Canonical filter labels, in display order.
    #[must_use]
    pub fn filter_labels(&self) -> &[String] {
        &self.filter_labels
    }

    /// Pulls a pending repository replacement into the engine.
    ///
    /// Returns true if a new collection was applied.
    pub fn sync(&mut self) -> bool {
        let Some(receiver) = self.binding.as_mut() else {
            return false;
        };
        if !receiver.has_changed().unwrap_or(false) {
            return false;
        }

        self.state.items = receiver.borrow_and_update().clone();
        tracing::debug!(count = self.state.items.len(), "repository collection replaced");
        self.recompute();
        true
    }

    /// Waits for the repository to publish a new collection, then applies it.
    ///
    /// Returns false immediately when unbound, or once the repository is
    /// gone.
    pub async fn collection_changed(&mut self) -> bool {
        let Some(receiver) = self.binding.as_mut() else {
            return false;
        };
        if receiver.changed().await.is_err() {
            return false;
        }

        self.state.items = receiver.borrow_and_update().clone();
        tracing::debug!(count = self.state.items.len(), "repository collection replaced");
        self.recompute();
        true
    }

    /// Receiver observing the derived subset.
    #[must_use]
    pub fn subscribe_items(&self) -> watch::Receiver<Vec<Item>> {
        self.items_tx.subscribe()
    }

    /// Receiver observing the display state.
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<DisplayState> {
        self.display_tx.subscribe()
    }

    /// Current derived subset.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.state.filtered_items
    }

    /// Current full collection.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.state.items
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        self.display_tx.borrow().clone()
    }

    #[must_use]
    pub fn search_phrase(&self) -> &str {
        &self.state.search_phrase
    }

    #[must_use]
    pub fn active_filters(&self) -> &FilterSet {
        &self.state.filters
    }

    /// Latest collection the provider holds, through the binding if bound.
    fn current_snapshot(&mut self) -> Vec<Item> {
        match self.binding.as_mut() {
            Some(receiver) => receiver.borrow_and_update().clone(),
            None => self.provider.subscribe().borrow().clone(),
        }
    }

    /// Recomputes the derived subset and publishes it if needed.
    ///
    /// Returns true if a value was published.
    fn recompute(&mut self) -> bool {
        self.state.apply_filters();

        let next = &self.state.filtered_items;
        let force = !self.published;
        self.published = true;

        self.items_tx.send_if_modified(|current| {
            if force || current != next {
                current.clone_from(next);
                true
            } else {
                false
            }
        })
    }
}

impl std::fmt::Debug for ListEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEngine")
            .field("state", &self.state)
            .field("bound", &self.binding.is_some())
            .field("display_state", &*self.display_tx.borrow())
            .finish_non_exhaustive()
    }
}
