//! # HTTP Retrieval Utilities
//!
//! This module provides a small asynchronous API client wrapper around `reqwest`.
//! One `ApiClient` owns one pooled `reqwest::Client`, a base URL that every
//! relative path is joined to, and a bounded request timeout. Responses are
//! returned in a standardized `ApiResponse` container: a non-2xx status is
//! reported, not raised, while transport and decoding failures surface as
//! [`SearchError`].
//!
//! The client sends exactly what it is asked to send. It never retries.

use std::time::Duration;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// A standardized container for API responses.
///
/// This struct wraps the deserialized data along with metadata about the
/// HTTP transaction, such as the status code.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The successfully deserialized response body, if any.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
}

/// Construction options for [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientOptions {
    /// Total time allowed for one request, from connect to the last body byte.
    pub timeout_ms: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: concat!("hn-search/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// An asynchronous JSON-over-HTTP client bound to one base URL.
///
/// Cloning is cheap: the inner `reqwest::Client` is reference counted and
/// shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying pooled HTTP client.
    inner: reqwest::Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
    /// Per-request timeout, also installed as the client default.
    timeout: Duration,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL for the API (e.g., "http://hn.algolia.com/api/v1/").
    ///   Keep the trailing slash, otherwise the last segment is replaced on join.
    /// * `options` - Timeout and user agent.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidUrl`] when `base_url` is not absolute and
    /// [`SearchError::Client`] when the HTTP backend cannot be initialized.
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, SearchError> {
        let url = Url::parse(base_url)
            .map_err(|e| SearchError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(SearchError::InvalidUrl(format!(
                "{base_url}: cannot be used as a base URL"
            )));
        }

        let timeout = Duration::from_millis(options.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(SearchError::Client)?;

        Ok(Self {
            inner: client,
            base_url: url,
            timeout,
        })
    }

    /// Builds a request without sending it.
    ///
    /// # Arguments
    /// * `method` - The HTTP verb (GET, POST, etc.).
    /// * `path` - The relative path to append to the base URL.
    /// * `query` - Optional serializable query parameters, URL-encoded in field order.
    pub fn build_request<Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
    ) -> Result<reqwest::Request, SearchError>
    where
        Q: Serialize + ?Sized,
    {
        let full_url = self
            .base_url
            .join(path)
            .map_err(|e| SearchError::InvalidUrl(format!("{}{path}: {e}", self.base_url)))?;
        let mut req = self.inner.request(method, full_url).timeout(self.timeout);

        if let Some(q) = query {
            req = req.query(q);
        }

        req.build().map_err(SearchError::from_reqwest)
    }

    /// Performs one HTTP request and decodes a successful body as JSON.
    ///
    /// # Errors
    /// Transport failures, timeouts and undecodable 2xx bodies are returned as
    /// `Err`. A non-2xx status is `Ok` with `success == false` and the raw body
    /// in `error_body`.
    pub async fn request<T, Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
    ) -> Result<ApiResponse<T>, SearchError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, query)?;

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(SearchError::from_reqwest)?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(SearchError::from_reqwest)?;
            let data = serde_json::from_slice::<T>(&bytes)?;
            Ok(ApiResponse {
                data: Some(data),
                error_body: None,
                status: status.as_u16(),
                success: true,
            })
        } else {
            // Capture the error body as a string for debugging
            let error_text = response.text().await.ok();
            Ok(ApiResponse {
                data: None,
                error_body: error_text,
                status: status.as_u16(),
                success: false,
            })
        }
    }
}
