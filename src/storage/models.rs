//! Cache record models for the persistence layer.
//!
//! These types describe how a cached collection is laid out on disk. They are
//! separate from the domain [`Item`] list so the file can carry bookkeeping
//! (format version, write timestamp) without leaking it into the domain.

use crate::domain::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current version of the cache file format.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// One cached collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unix timestamp of the write.
    pub stored_at: i64,

    /// Items exactly as they were fetched.
    pub items: Vec<Item>,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinlist::storage::CacheEntry;
    ///
    /// let entry = CacheEntry::new(vec![]);
    /// assert!(entry.items.is_empty());
    /// assert!(entry.stored_at > 0);
    /// ```
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            stored_at: chrono::Utc::now().timestamp(),
            items,
        }
    }
}

/// Top-level structure serialized to the cache file.
///
/// Entries are kept as raw JSON values so one corrupt entry does not make the
/// others unreadable.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "cryptoCoins": {
///       "stored_at": 1733400000,
///       "items": [{"name": "Bitcoin", "symbol": "BTC", "is_new": false, "is_active": true, "type": "coin"}]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    pub version: u32,

    #[serde(default)]
    pub entries: HashMap<String, serde_json::Value>,
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: CACHE_FORMAT_VERSION,
            entries: HashMap::new(),
        }
    }
}
