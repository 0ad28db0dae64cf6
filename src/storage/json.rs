//! JSON file-based cache store.
//!
//! Keeps every cached collection in one human-readable JSON file. The whole
//! file is loaded at open and rewritten on every store, using an atomic
//! write (write-to-temp + rename) so a crash never leaves a half-written
//! cache behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) lookup in the in-memory copy, plus decoding of one entry
//! - **Write**: O(n) - serializes and writes the entire file
//! - **Best for**: a handful of keys holding tens to hundreds of items

use crate::domain::error::{CoinListError, Result};
use crate::domain::Item;
use crate::storage::backend::CacheStore;
use crate::storage::models::{CacheEntry, CacheFile};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSON file cache backend.
///
/// # Thread Safety
///
/// The in-memory copy sits behind a `Mutex`, so the store is `Send + Sync`
/// and can be shared behind an `Arc`.
#[derive(Debug)]
pub struct JsonCacheStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file, loaded on open.
    data: Mutex<CacheFile>,
}

impl JsonCacheStore {
    /// Opens a JSON cache file, creating parent directories as needed.
    ///
    /// A missing file starts an empty cache. A file that exists but cannot be
    /// parsed is treated the same way (with a warning) because a cache is
    /// only ever a fallback; it is overwritten on the next store.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coinlist::storage::JsonCacheStore;
    ///
    /// let store = JsonCacheStore::open("/tmp/coinlist/cache.json")?;
    /// # Ok::<(), coinlist::CoinListError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON cache");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty cache");
            CacheFile::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "cache opened");

        Ok(Self {
            file_path,
            data: Mutex::new(data),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<CacheFile> {
        let contents = std::fs::read(path)?;

        match serde_json::from_slice::<CacheFile>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded cache file");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "cache file is corrupt, starting empty");
                Ok(CacheFile::default())
            }
        }
    }

    fn save_to_file(&self, data: &CacheFile) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| CoinListError::Storage(format!("failed to serialize cache: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "cache saved");
        Ok(())
    }
}

impl CacheStore for JsonCacheStore {
    fn store(&self, key: &str, items: &[Item]) -> Result<()> {
        let _span = tracing::debug_span!("json_cache_store", key = %key, count = items.len()).entered();

        let entry = serde_json::to_value(CacheEntry::new(items.to_vec()))
            .map_err(|e| CoinListError::Storage(format!("failed to encode entry: {e}")))?;

        let mut data = self
            .data
            .lock()
            .map_err(|e| CoinListError::Storage(format!("cache lock poisoned: {e}")))?;
        let mut next = data.clone();
        next.entries.insert(key.to_string(), entry);
        self.save_to_file(&next)?;

        *data = next;
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Option<Vec<Item>> {
        let _span = tracing::debug_span!("json_cache_retrieve", key = %key).entered();

        let raw = {
            let data = self.data.lock().ok()?;
            data.entries.get(key).cloned()
        };

        let Some(raw) = raw else {
            tracing::debug!("no cached entry");
            return None;
        };

        match serde_json::from_value::<CacheEntry>(raw) {
            Ok(entry) => {
                tracing::debug!(count = entry.items.len(), stored_at = entry.stored_at, "cache hit");
                Some(entry.items)
            }
            Err(e) => {
                tracing::debug!(error = %e, "cached entry is unreadable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CryptoType;
    use crate::storage::CACHE_KEY;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Bitcoin", "BTC", false, true, CryptoType::Coin),
            Item::new("Chainlink", "LINK", true, true, CryptoType::Token),
        ]
    }

    #[test]
    fn missing_key_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCacheStore::open(dir.path().join("cache.json")).unwrap();

        assert_eq!(store.retrieve(CACHE_KEY), None);
    }

    #[test]
    fn stored_items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");

        let store = JsonCacheStore::open(&path).unwrap();
        store.store(CACHE_KEY, &sample()).unwrap();
        assert_eq!(store.retrieve(CACHE_KEY), Some(sample()));
        drop(store);

        let reopened = JsonCacheStore::open(&path).unwrap();
        assert_eq!(reopened.retrieve(CACHE_KEY), Some(sample()));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn store_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCacheStore::open(dir.path().join("cache.json")).unwrap();

        store.store(CACHE_KEY, &sample()).unwrap();
        store.store(CACHE_KEY, &sample()[..1]).unwrap();

        assert_eq!(store.retrieve(CACHE_KEY).map(|items| items.len()), Some(1));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonCacheStore::open(&path).unwrap();
        assert_eq!(store.retrieve(CACHE_KEY), None);

        store.store(CACHE_KEY, &sample()).unwrap();
        assert_eq!(store.retrieve(CACHE_KEY), Some(sample()));
    }

    #[test]
    fn non_utf8_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        let store = JsonCacheStore::open(&path).unwrap();
        assert_eq!(store.retrieve(CACHE_KEY), None);
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let store = JsonCacheStore::open(&path).unwrap();
        store.store(CACHE_KEY, &sample()).unwrap();

        // A directory in place of the temp file makes the write fail.
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(store.store(CACHE_KEY, &sample()[..1]).is_err());
        assert_eq!(store.retrieve(CACHE_KEY), Some(sample()));
    }

    #[test]
    fn corrupt_entry_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(
            &path,
            r#"{"version":1,"entries":{"cryptoCoins":{"stored_at":1,"items":[{"name":1}]}}}"#,
        )
        .unwrap();

        let store = JsonCacheStore::open(&path).unwrap();
        assert_eq!(store.retrieve(CACHE_KEY), None);
    }
}
