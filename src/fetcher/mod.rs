//! Remote fetcher layer.
//!
//! The [`Fetcher`] trait is the transport collaborator of the repository: one
//! call performs one request and yields decoded items or a typed
//! [`FetchError`]. The transport is passed into the repository explicitly;
//! there is no shared global client.
//!
//! # Modules
//!
//! - `endpoint`: Request descriptors and URL construction
//! - `http`: `reqwest`-based implementation

pub mod endpoint;
pub mod http;

pub use endpoint::{Endpoint, HttpMethod};
pub use http::HttpFetcher;

use crate::domain::{FetchError, Item};
use async_trait::async_trait;

/// Performs a single remote fetch of an item collection.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the item collection behind `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no collection was obtained.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<Item>, FetchError>;
}
