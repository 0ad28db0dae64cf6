//! Coinlist: the core of a crypto coin list screen.
//!
//! Coinlist fetches a list of crypto items from a remote API, keeps an offline
//! copy for when the network fails, and derives the displayed subset from a
//! free-text search and a set of toggleable filters:
//! - Remote fetch with typed errors over `reqwest`
//! - Cache-on-success and cache-fallback-on-failure backed by a JSON file
//! - Case-insensitive name search combined with ANDed filter predicates
//! - Observable derived list and loading state over `tokio::sync::watch`
//! - Display-ready view model for a presentation adapter

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation Adapter (host application)            │  ← Renders
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │  ← View model
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Search/filter
//! │  - Event handling                                   │
//! │  - Derived subset and display state                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Repository Layer (repository/)                     │  ← Fetch + fallback
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                      ┌───────────────┐
//! │ Fetcher Layer │                      │ Storage Layer │
//! │ (fetcher/)    │                      │ (storage/)    │
//! │ - Endpoints   │                      │ - JSON file   │
//! │ - HTTP client │                      │ - In-memory   │
//! └───────────────┘                      └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Item, filters, errors (domain/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Engine, event handler and list state
//! - [`domain`]: Core domain types (Item, filters, errors)
//! - [`fetcher`]: Remote fetch over HTTP
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`repository`]: Fetch with cache fallback and observable collection
//! - [`storage`]: Cache stores
//! - [`ui`]: View model for rendering
//! - [`observability`]: Log file tracing
//!
//! # Configuration
//!
//! Configuration comes either from a flat key/value map or from a TOML file:
//!
//! ```toml
//! data_dir = "~/.local/share/coinlist"
//! trace_level = "debug"
//!
//! [api]
//! scheme = "https"
//! host = "api.example.com"
//! path = "/coins"
//! timeout_secs = 10
//! ```
//!
//! # Initialization Flow
//!
//! 1. Load a [`Config`] and call [`observability::init_tracing`]
//! 2. [`build_engine`] wires the HTTP fetcher, the JSON cache and the
//!    repository into a [`ListEngine`]
//! 3. `ListEngine::initialize` runs the first fetch and binds to the
//!    repository stream
//! 4. The adapter feeds [`Event`]s to [`handle_event`] and renders
//!    [`ListViewModel::compute`] whenever it gets [`Action::Render`]
//!
//! # Examples
//!
//! ```no_run
//! use coinlist::{build_engine, handle_event, Config, Event, Item, ListViewModel, Router};
//! use std::sync::Arc;
//!
//! struct PrintRouter;
//!
//! impl Router for PrintRouter {
//!     fn route_to_detail(&self, item: &Item) {
//!         println!("open {}", item.name);
//!     }
//! }
//!
//! # async fn run() -> coinlist::Result<()> {
//! let config = Config::default();
//! let mut engine = build_engine(&config, Arc::new(PrintRouter))?;
//! engine.initialize().await;
//!
//! handle_event(&mut engine, &Event::SearchChanged("bit".into()));
//! let vm = ListViewModel::compute(&engine);
//! println!("{}", vm.header.title);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod fetcher;
pub mod infrastructure;
pub mod repository;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ListEngine, Router};
pub use domain::{CoinListError, CryptoType, DisplayState, FetchError, FilterAction, Item, Result};
pub use ui::ListViewModel;

use fetcher::HttpFetcher;
use repository::ItemRepository;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storage::JsonCacheStore;

/// Host of the public mock API serving the crypto list.
pub const DEFAULT_API_HOST: &str = "37656be98b8f42ae8348e4da3ee3193f.api.mockbin.io";

/// Remote API location and transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL scheme. Default: `"https"`
    pub scheme: String,

    /// Host name, optionally with a port. Default: [`DEFAULT_API_HOST`]
    pub host: String,

    /// Path of the crypto list resource. Default: `"/"`
    pub path: String,

    /// Whole-request timeout in seconds. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: DEFAULT_API_HOST.to_string(),
            path: "/".to_string(),
            timeout_secs: Some(30),
        }
    }
}

/// Crate configuration.
///
/// # Example
///
/// ```rust
/// use coinlist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.api.scheme, "https");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,

    /// Directory holding the cache file and the log file.
    ///
    /// A leading `~` is expanded to the home directory. Default:
    /// `~/.local/share/coinlist`
    pub data_dir: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// Unknown keys are ignored and values that do not parse fall back to
    /// their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `api_scheme`, `api_host`, `api_path`: taken as-is when non-empty
    /// - `api_timeout_secs`: String → `u64`; `0` disables the timeout
    /// - `data_dir`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use coinlist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_host".to_string(), "localhost:8080".to_string());
    /// map.insert("api_timeout_secs".to_string(), "5".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api.host, "localhost:8080");
    /// assert_eq!(config.api.timeout_secs, Some(5));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = ApiConfig::default();
        let text = |key: &str, fallback: String| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(fallback, String::from)
        };

        let timeout_secs = match config.get("api_timeout_secs").map(|s| s.trim().parse::<u64>()) {
            Some(Ok(0)) => None,
            Some(Ok(secs)) => Some(secs),
            Some(Err(_)) | None => defaults.timeout_secs,
        };

        Self {
            api: ApiConfig {
                scheme: text("api_scheme", defaults.scheme),
                host: text("api_host", defaults.host),
                path: text("api_path", defaults.path),
                timeout_secs,
            },
            data_dir: config.get("data_dir").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CoinListError::Config`] if the document is not valid TOML or
    /// a field has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CoinListError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CoinListError::Io`] if the file cannot be read, or
    /// [`CoinListError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        infrastructure::data_dir(self.data_dir.as_deref())
    }

    /// Location of the JSON cache file inside the data directory.
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir().join(infrastructure::CACHE_FILE_NAME)
    }
}

/// Wires the production collaborators into an engine.
///
/// Creates:
/// - an [`HttpFetcher`] for `config.api`
/// - a [`JsonCacheStore`] at [`Config::cache_path`]
/// - an [`ItemRepository`] combining both
///
/// The returned engine is in the `Loading` state; call
/// [`ListEngine::initialize`] to run the first fetch.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the cache file
/// location cannot be created.
pub fn build_engine(config: &Config, router: Arc<dyn Router>) -> Result<ListEngine> {
    tracing::debug!(host = %config.api.host, "building coin list engine");

    let fetcher = HttpFetcher::new(config.api.clone())?;
    let cache = JsonCacheStore::open(config.cache_path())?;
    let repository = ItemRepository::new(Arc::new(fetcher), Arc::new(cache));

    Ok(ListEngine::new(Arc::new(repository), router))
}
