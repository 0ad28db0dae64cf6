//! Storage layer for the offline item cache.
//!
//! The repository writes every successful fetch here and reads it back only
//! when a fetch fails. Only a single fixed key is used by the crate itself.
//!
//! # Modules
//!
//! - `backend`: Cache store trait and the fixed cache key
//! - `json`: JSON file-based implementation
//! - `memory`: In-process implementation
//! - `models`: On-disk record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{CacheStore, CACHE_KEY};
pub use json::JsonCacheStore;
pub use memory::MemoryCacheStore;
pub use models::{CacheEntry, CacheFile};
