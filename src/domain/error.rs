//! Error types for the coin list core.
//!
//! [`FetchError`] is the typed failure of the remote fetcher and travels
//! unmodified through the repository up to the engine. [`CoinListError`] is
//! the crate-level error for storage and configuration, with a [`Result`]
//! alias for convenient propagation. Both use `thiserror`.

use thiserror::Error;

/// Failure of a single remote fetch.
///
/// The `Display` text is what the engine surfaces as
/// [`DisplayState::Error`](crate::domain::DisplayState::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint could not be turned into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No network connection could be established.
    #[error("No network connection available")]
    NoNetwork,

    /// The server answered with a non-success status code.
    #[error("Request failed with HTTP status {0}")]
    HttpStatus(u16),

    /// The response body did not decode into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// The main error type for storage and configuration operations.
///
/// # Examples
///
/// ```
/// use coinlist::domain::CoinListError;
///
/// fn validate() -> Result<(), CoinListError> {
///     Err(CoinListError::Config("api host is empty".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CoinListError {
    /// Reading from or writing to a cache store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A remote fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// A specialized `Result` type for coin list operations.
pub type Result<T> = std::result::Result<T, CoinListError>;
