//! Endpoint descriptors and URL construction.

use crate::domain::FetchError;
use crate::ApiConfig;
use std::collections::BTreeMap;
use url::Url;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Describes a single request: method, path, optional query and body.
///
/// The scheme and host come from [`ApiConfig`] when the URL is built.
///
/// # Examples
///
/// ```
/// use coinlist::fetcher::Endpoint;
/// use coinlist::ApiConfig;
///
/// let api = ApiConfig { scheme: "https".into(), host: "api.example.com".into(), ..Default::default() };
/// let url = Endpoint::get("/coins").with_query("page", "1").url(&api)?;
/// assert_eq!(url.as_str(), "https://api.example.com/coins?page=1");
/// # Ok::<(), coinlist::FetchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
}

impl Endpoint {
    /// A GET request without query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// A POST request carrying `body`.
    pub fn post(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: BTreeMap::new(),
            body: Some(body),
        }
    }

    /// The crypto list endpoint. Its path is taken from [`ApiConfig::path`].
    #[must_use]
    pub fn crypto_list() -> Self {
        Self::get("")
    }

    /// Adds a query parameter, replacing an earlier one with the same name.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(name.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Builds the absolute URL for this endpoint.
    ///
    /// An empty endpoint path falls back to the configured API path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the scheme/host pair does not
    /// form a valid base URL.
    pub fn url(&self, api: &ApiConfig) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}://{}", api.scheme, api.host))
            .map_err(|e| FetchError::InvalidUrl(format!("{}://{}: {e}", api.scheme, api.host)))?;

        let path = if self.path.is_empty() { api.path.as_str() } else { self.path.as_str() };
        url.set_path(path);

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}
