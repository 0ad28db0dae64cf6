//! Item repository: fetch, cache on success, fall back on failure.
//!
//! The repository owns the full item collection and publishes every
//! replacement on a `tokio::sync::watch` channel. Subscribers always see the
//! latest snapshot first and are woken on each replacement.
//!
//! # Fetch Cycle
//!
//! ```text
//! fetch_data()
//!   ├─ Ok(items)  → replace collection → store under CACHE_KEY → Ok(())
//!   └─ Err(error) → retrieve CACHE_KEY ─┬─ Some(items) → replace collection
//!                                       └─ None        → leave collection
//!                  → Err(error)  (always re-raised)
//! ```
//!
//! Concurrent calls are not deduplicated; the collection reflects whichever
//! fetch completes last.

use crate::domain::{dedup_items, FetchError, Item};
use crate::fetcher::{Endpoint, Fetcher};
use crate::storage::{CacheStore, CACHE_KEY};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;

/// Source of the full item collection consumed by the engine.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Returns a receiver observing every replacement of the collection.
    fn subscribe(&self) -> watch::Receiver<Vec<Item>>;

    /// Runs one fetch cycle.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error, even when a cached collection was loaded
    /// in its place.
    async fn fetch_data(&self) -> Result<(), FetchError>;
}

/// Repository combining a remote fetcher with a cache fallback.
pub struct ItemRepository {
    fetcher: Arc<dyn Fetcher>,
    cache: Arc<dyn CacheStore>,
    endpoint: Endpoint,
    items: watch::Sender<Vec<Item>>,
}

impl ItemRepository {
    /// Creates a repository with an empty collection.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coinlist::fetcher::HttpFetcher;
    /// use coinlist::repository::ItemRepository;
    /// use coinlist::storage::MemoryCacheStore;
    /// use coinlist::ApiConfig;
    /// use std::sync::Arc;
    ///
    /// let fetcher = HttpFetcher::new(ApiConfig::default())?;
    /// let repository = ItemRepository::new(Arc::new(fetcher), Arc::new(MemoryCacheStore::new()));
    /// assert!(repository.items().is_empty());
    /// # Ok::<(), coinlist::FetchError>(())
    /// ```
    pub fn new(fetcher: Arc<dyn Fetcher>, cache: Arc<dyn CacheStore>) -> Self {
        let (items, _) = watch::channel(Vec::new());
        Self {
            fetcher,
            cache,
            endpoint: Endpoint::crypto_list(),
            items,
        }
    }

    /// Snapshot of the current full collection.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    fn replace(&self, items: Vec<Item>) {
        tracing::debug!(count = items.len(), "replacing item collection");
        self.items.send_replace(items);
    }

    async fn run_fetch_cycle(&self) -> Result<(), FetchError> {
        match self.fetcher.fetch(&self.endpoint).await {
            Ok(items) => {
                let items = dedup_items(items);
                self.replace(items.clone());

                if let Err(e) = self.cache.store(CACHE_KEY, &items) {
                    tracing::warn!(error = %e, "failed to cache fetched items");
                }
                Ok(())
            }
            Err(error) => {
                tracing::debug!(error = %error, "fetch failed, trying cache");

                match self.cache.retrieve(CACHE_KEY) {
                    Some(cached) => {
                        tracing::debug!(count = cached.len(), "recovered stale items from cache");
                        self.replace(dedup_items(cached));
                    }
                    None => tracing::debug!("no cached items available"),
                }
                Err(error)
            }
        }
    }
}

#[async_trait]
impl DataProvider for ItemRepository {
    fn subscribe(&self) -> watch::Receiver<Vec<Item>> {
        self.items.subscribe()
    }

    async fn fetch_data(&self) -> Result<(), FetchError> {
        self.run_fetch_cycle()
            .instrument(tracing::debug_span!("fetch_data", path = self.endpoint.path()))
            .await
    }
}

impl std::fmt::Debug for ItemRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRepository")
            .field("endpoint", &self.endpoint)
            .field("item_count", &self.items.borrow().len())
            .finish_non_exhaustive()
    }
}
