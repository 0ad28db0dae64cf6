//! In-process cache store.

use crate::domain::error::{CoinListError, Result};
use crate::domain::Item;
use crate::storage::backend::CacheStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Cache store backed by a `HashMap`, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, Vec<Item>>>,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items` under `key`.
    #[must_use]
    pub fn with_entry(key: &str, items: Vec<Item>) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), items);
        }
        store
    }
}

impl CacheStore for MemoryCacheStore {
    fn store(&self, key: &str, items: &[Item]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CoinListError::Storage(format!("cache lock poisoned: {e}")))?;
        entries.insert(key.to_string(), items.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Option<Vec<Item>> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}
