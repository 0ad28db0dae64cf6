//! List state and derived-subset computation.
//!
//! [`ListState`] holds the three inputs of the displayed list (the full
//! collection, the search phrase and the active filter set) together with
//! the subset derived from them. The derivation itself is the pure function
//! [`derive_subset`]; `ListState` only decides when to run it.
//!
//! # Derivation
//!
//! 1. **Search**: keep items whose name contains the phrase, ignoring case
//!    (all items when the phrase is empty)
//! 2. **Filters**: keep items satisfying every active predicate
//!
//! # Example
//!
//! ```rust
//! use coinlist::app::ListState;
//! use coinlist::domain::{CryptoType, FilterAction, Item};
//!
//! let mut state = ListState::new(vec![
//!     Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin),
//!     Item::new("Uniswap", "UNI", false, true, CryptoType::Token),
//! ]);
//! state.toggle_filter("Token", FilterAction::Add);
//! state.apply_filters();
//! assert_eq!(state.filtered_items.len(), 1);
//! ```

use crate::domain::{FilterAction, FilterPredicate, FilterSet, Item};

/// Computes the displayed subset of `items`.
///
/// Order of `items` is preserved.
#[must_use]
pub fn derive_subset(items: &[Item], search_phrase: &str, filters: &FilterSet) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.name_contains(search_phrase))
        .filter(|item| filters.matches(item))
        .cloned()
        .collect()
}

/// Inputs and output of the displayed list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Full collection mirrored from the repository.
    pub items: Vec<Item>,

    /// Current search phrase. Empty means no text filtering.
    pub search_phrase: String,

    /// Predicates currently switched on.
    pub filters: FilterSet,

    /// Items matching `search_phrase` and `filters`.
    ///
    /// Recomputed by `apply_filters()`.
    pub filtered_items: Vec<Item>,
}

impl ListState {
    /// Creates a state over `items` with no search and no filters.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Applies a filter toggle by label.
    ///
    /// Labels resolve against [`FilterPredicate::CANONICAL`]; an unknown label
    /// is a no-op. Returns true if the filter set changed. Does not recompute
    /// `filtered_items`.
    pub fn toggle_filter(&mut self, label: &str, action: FilterAction) -> bool {
        let Some(predicate) = FilterPredicate::from_label(label) else {
            tracing::debug!(label = %label, "ignoring unknown filter label");
            return false;
        };

        let changed = self.filters.apply(predicate, action);
        tracing::debug!(?predicate, ?action, changed, "filter toggled");
        changed
    }

    /// Clears the search phrase and every active filter.
    pub fn reset(&mut self) {
        self.search_phrase.clear();
        self.filters.clear();
    }

    /// Recomputes `filtered_items` from the current inputs.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total_items = self.items.len(),
            query_len = self.search_phrase.len(),
            active_filters = self.filters.len()
        ).entered();

        self.filtered_items = derive_subset(&self.items, &self.search_phrase, &self.filters);

        tracing::debug!(filtered_count = self.filtered_items.len(), "filters applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CryptoType;

    fn bitcoin() -> Item {
        Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin)
    }

    fn ethereum() -> Item {
        Item::new("Ethereum", "ETH", false, false, CryptoType::Coin)
    }

    fn chainlink() -> Item {
        Item::new("Chainlink", "LINK", true, true, CryptoType::Token)
    }

    fn tether() -> Item {
        Item::new("Tether", "USDT", true, false, CryptoType::Unknown)
    }

    fn collection() -> Vec<Item> {
        vec![bitcoin(), ethereum(), chainlink(), tether()]
    }

    #[test]
    fn no_inputs_yields_full_collection() {
        assert_eq!(derive_subset(&collection(), "", &FilterSet::new()), collection());
    }

    #[test]
    fn search_matches_substring_ignoring_case() {
        assert_eq!(derive_subset(&collection(), "Bit", &FilterSet::new()), vec![bitcoin()]);
        assert_eq!(derive_subset(&collection(), "ETH", &FilterSet::new()), vec![ethereum(), tether()]);
        assert_eq!(derive_subset(&collection(), "in", &FilterSet::new()), vec![bitcoin(), chainlink()]);
        assert!(derive_subset(&collection(), "doge", &FilterSet::new()).is_empty());
    }

    #[test]
    fn filters_are_anded() {
        let mut filters = FilterSet::new();
        filters.insert(FilterPredicate::IsNew(true));
        assert_eq!(derive_subset(&collection(), "", &filters), vec![chainlink(), tether()]);

        filters.insert(FilterPredicate::IsActive(true));
        assert_eq!(derive_subset(&collection(), "", &filters), vec![chainlink()]);

        filters.insert(FilterPredicate::IsCoin);
        assert!(derive_subset(&collection(), "", &filters).is_empty());
    }

    #[test]
    fn search_and_filters_combine() {
        let mut filters = FilterSet::new();
        filters.insert(FilterPredicate::IsActive(true));

        assert_eq!(derive_subset(&collection(), "in", &filters), vec![bitcoin(), chainlink()]);
        assert!(derive_subset(&collection(), "e", &filters).is_empty());
    }

    #[test]
    fn coin_filter_keeps_all_coins() {
        let items = vec![bitcoin(), ethereum()];
        let mut state = ListState::new(items.clone());

        state.toggle_filter("Coins", FilterAction::Add);
        state.apply_filters();
        assert_eq!(state.filtered_items, items);

        state.toggle_filter("Active", FilterAction::Add);
        state.apply_filters();
        assert_eq!(state.filtered_items, vec![bitcoin()]);
    }

    #[test]
    fn unknown_label_is_ignored() {
        let mut state = ListState::new(collection());

        assert!(!state.toggle_filter("Popular", FilterAction::Add));
        assert!(state.filters.is_empty());
    }

    #[test]
    fn active_label_always_means_active_true() {
        let mut state = ListState::new(collection());
        state.toggle_filter("Active", FilterAction::Add);

        assert!(state.filters.contains(FilterPredicate::IsActive(true)));
        assert!(!state.filters.contains(FilterPredicate::IsActive(false)));
    }

    #[test]
    fn reset_clears_search_and_filters() {
        let mut state = ListState::new(collection());
        state.search_phrase = "bit".into();
        state.toggle_filter("New", FilterAction::Add);
        state.apply_filters();
        assert!(state.filtered_items.is_empty());

        state.reset();
        state.apply_filters();
        assert_eq!(state.filtered_items, collection());
        assert!(state.search_phrase.is_empty());
        assert!(state.filters.is_empty());
    }
}
