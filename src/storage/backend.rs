//! Cache store abstraction.
//!
//! This module defines the [`CacheStore`] trait, the key-value persistence
//! collaborator the repository uses to keep the last successful fetch around
//! for offline display. The store is write-on-success and read-on-failure
//! only; it is never the source of truth while the network is reachable.

use crate::domain::error::Result;
use crate::domain::Item;

/// The fixed key under which the fetched collection is cached.
pub const CACHE_KEY: &str = "cryptoCoins";

/// Abstraction over key-value cache backends.
///
/// Implementations provide shared access (`&self`) so a single store can be
/// held by the repository behind an `Arc`.
///
/// # Implementations
///
/// - [`JsonCacheStore`](crate::storage::JsonCacheStore): JSON file with atomic writes
/// - [`MemoryCacheStore`](crate::storage::MemoryCacheStore): process-local map
///
/// # Examples
///
/// ```
/// use coinlist::storage::{CacheStore, MemoryCacheStore, CACHE_KEY};
///
/// let store = MemoryCacheStore::new();
/// store.store(CACHE_KEY, &[])?;
/// assert_eq!(store.retrieve(CACHE_KEY), Some(vec![]));
/// # Ok::<(), coinlist::CoinListError>(())
/// ```
pub trait CacheStore: Send + Sync {
    /// Stores `items` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or persisted.
    fn store(&self, key: &str, items: &[Item]) -> Result<()>;

    /// Retrieves the collection stored under `key`.
    ///
    /// Returns `None` when the key is absent or the stored blob is unreadable.
    /// Read failures are never surfaced as errors.
    fn retrieve(&self, key: &str) -> Option<Vec<Item>>;
}
