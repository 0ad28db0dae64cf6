//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the crate keeps its cache and log files.

pub mod paths;

pub use paths::{data_dir, expand_tilde, CACHE_FILE_NAME, DEFAULT_DATA_DIR};
