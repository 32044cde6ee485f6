//! # Hacker News Story Search
//!
//! `NewsSearchClient` runs exact-phrase title searches over Hacker News
//! stories, newest first, up to 100 hits per call.
//!
//! Three entry points share the same single request:
//! - [`NewsSearchClient::search_news`] returns the raw body or `None`. Every
//!   failure is logged once at `error` level and collapsed to `None`.
//! - [`NewsSearchClient::try_search_news`] returns the raw body or a
//!   [`SearchError`] whose [`kind`](SearchError::kind) tells failures apart.
//!   It does not log.
//! - [`NewsSearchClient::search_stories`] deserializes the body into
//!   [`SearchResponse`].
//!
//! The free function [`search_news`] uses a process-wide client built on
//! first use with [`SearchOptions::default`].

use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use static_init::dynamic;

use crate::error::SearchError;
use crate::news::hackernews::apicallhn::{ApiCallHn, HN_SEARCH_BASE_URL};
use crate::news::hackernews::model::SearchResponse;
use crate::news::hackernews::params::SearchParams;
use crate::retrieve::ky_http::{ClientOptions, DEFAULT_TIMEOUT_MS};

/// Settings for a [`NewsSearchClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// API base URL, with trailing slash.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        let client = ClientOptions::default();
        Self {
            base_url: HN_SEARCH_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: client.user_agent,
        }
    }
}

impl SearchOptions {
    /// The HTTP-level subset of these options.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout_ms: self.timeout_ms,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Hacker News title search.
///
/// Build it once and clone it freely; clones share one connection pool.
/// Calls hold no shared mutable state and may run concurrently.
#[derive(Debug, Clone)]
pub struct NewsSearchClient {
    api_call: Arc<ApiCallHn>,
}

impl NewsSearchClient {
    /// Creates a client from `options`.
    ///
    /// # Errors
    /// Fails with a [`SearchErrorKind::Config`](crate::error::SearchErrorKind::Config)
    /// error when the base URL is invalid or the HTTP backend cannot start.
    pub fn new(options: &SearchOptions) -> Result<Self, SearchError> {
        let api_call = ApiCallHn::new(&options.base_url, &options.client_options())?;
        Ok(Self {
            api_call: Arc::new(api_call),
        })
    }

    /// Creates a client for the production API with default settings.
    pub fn with_defaults() -> Result<Self, SearchError> {
        Self::new(&SearchOptions::default())
    }

    /// Searches story titles for the exact phrase `query`.
    ///
    /// Returns the response body unchanged, or `None` on any failure
    /// (network, timeout, non-2xx status, malformed body). The failure is
    /// logged and otherwise discarded; use [`try_search_news`](Self::try_search_news)
    /// to inspect it.
    pub async fn search_news(&self, query: &str) -> Option<Value> {
        match self.try_search_news(query).await {
            Ok(body) => {
                debug!("news search for {query:?} returned: {body}");
                Some(body)
            }
            Err(e) => {
                error!("news search for {query:?} failed ({:?}): {e}", e.kind());
                None
            }
        }
    }

    /// Searches story titles for the exact phrase `query`, keeping the error.
    pub async fn try_search_news(&self, query: &str) -> Result<Value, SearchError> {
        let params = SearchParams::for_title(query);
        self.api_call.fetch_search_by_date(&params).await
    }

    /// Searches story titles and decodes the page into [`SearchResponse`].
    ///
    /// A JSON body that does not match the model is a
    /// [`Parse`](crate::error::SearchErrorKind::Parse) error.
    pub async fn search_stories(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let raw = self.try_search_news(query).await?;
        Ok(serde_json::from_value(raw)?)
    }
}

#[dynamic(lazy)]
static DEFAULT_CLIENT: Result<NewsSearchClient, SearchError> = NewsSearchClient::with_defaults();

/// Searches story titles with the process-wide default client.
///
/// Same contract as [`NewsSearchClient::search_news`].
pub async fn search_news(query: &str) -> Option<Value> {
    match &*DEFAULT_CLIENT {
        Ok(client) => client.search_news(query).await,
        Err(e) => {
            error!("news search for {query:?} failed: default client unavailable: {e}");
            None
        }
    }
}
