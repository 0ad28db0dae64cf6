//! HTTP fetcher built on `reqwest`.
//!
//! Maps every transport outcome onto [`FetchError`]:
//!
//! - URL construction failure → `InvalidUrl`
//! - connection or timeout failure → `NoNetwork`
//! - non-2xx status → `HttpStatus(code)`
//! - body that does not decode → `Decode(details)`
//! - anything else → `Unknown(details)`

use super::endpoint::{Endpoint, HttpMethod};
use super::Fetcher;
use crate::domain::{FetchError, Item};
use crate::ApiConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

/// Fetcher performing one HTTP request per call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    api: ApiConfig,
}

impl HttpFetcher {
    /// Creates a fetcher for the given API.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unknown`] if the HTTP client cannot be built.
    pub fn new(api: ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api })
    }

    /// Performs the request and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// See the module documentation for the error mapping.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, FetchError> {
        let url = endpoint.url(&self.api)?;
        tracing::debug!(method = endpoint.method.as_str(), url = %url, "sending request");

        let method = match endpoint.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = endpoint.body() {
            request = request.body(body.to_vec());
        }

        let response = request.send().await.map_err(|e| map_transport_error(&e))?;
        check_status(response.status().as_u16())?;

        let bytes = response.bytes().await.map_err(|e| map_transport_error(&e))?;
        tracing::debug!(bytes = bytes.len(), "response received");

        decode_body(&bytes)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<Item>, FetchError> {
        self.fetch_json(endpoint)
            .instrument(tracing::debug_span!("http_fetch", path = endpoint.path()))
            .await
    }
}

/// Accepts 2xx status codes only.
pub(crate) fn check_status(code: u16) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(FetchError::HttpStatus(code))
    }
}

/// Decodes a JSON body into `T`.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Decode(e.to_string()))
}

fn map_transport_error(e: &reqwest::Error) -> FetchError {
    if e.is_connect() || e.is_timeout() {
        FetchError::NoNetwork
    } else if e.is_builder() {
        FetchError::InvalidUrl(e.to_string())
    } else if e.is_decode() || e.is_body() {
        FetchError::Decode(e.to_string())
    } else {
        FetchError::Unknown(e.to_string())
    }
}
