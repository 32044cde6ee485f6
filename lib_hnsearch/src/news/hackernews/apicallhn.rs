//! # Hacker News API Client
//!
//! Endpoint-specific caller for the Algolia-hosted Hacker News search API.
//! It owns an `ApiClient` pre-configured with the API base URL and turns the
//! non-throwing `ApiResponse` into a `Result`: anything other than a decoded
//! 2xx body is a [`SearchError`].
//!
//! One call is one request. There is no retry loop here.

use reqwest::Method;
use serde_json::Value;

use crate::error::SearchError;
use crate::news::hackernews::params::{SEARCH_BY_DATE_PATH, SearchParams};
use crate::retrieve::ky_http::{ApiClient, ClientOptions};

/// Production base URL of the Hacker News search API.
pub const HN_SEARCH_BASE_URL: &str = "http://hn.algolia.com/api/v1/";

/// # Hacker News API Call Client
///
/// Wraps an `ApiClient` bound to the search API base URL.
#[derive(Debug, Clone)]
pub struct ApiCallHn {
    /// The underlying generic HTTP client.
    client: ApiClient,
}

impl ApiCallHn {
    /// Creates a client for the API at `base_url`.
    ///
    /// Production callers pass [`HN_SEARCH_BASE_URL`]; tests point it at a local server.
    pub fn new(base_url: &str, options: &ClientOptions) -> Result<Self, SearchError> {
        Ok(Self {
            client: ApiClient::new(base_url, options)?,
        })
    }

    /// Builds the `search_by_date` request for `params` without sending it.
    pub fn build_search_request(
        &self,
        params: &SearchParams,
    ) -> Result<reqwest::Request, SearchError> {
        self.client
            .build_request(Method::GET, SEARCH_BY_DATE_PATH, Some(params))
    }

    /// # Fetch Search By Date
    ///
    /// Issues one `GET search_by_date` request and returns the JSON body untouched.
    ///
    /// ## Errors
    /// - Non-2xx status: [`SearchError::Status`] with the server's body.
    /// - Transport failure or timeout: [`SearchError::Network`] / [`SearchError::Timeout`].
    /// - 2xx with a body that is not JSON: [`SearchError::Parse`].
    pub async fn fetch_search_by_date(&self, params: &SearchParams) -> Result<Value, SearchError> {
        let response = self
            .client
            .request::<Value, SearchParams>(Method::GET, SEARCH_BY_DATE_PATH, Some(params))
            .await?;

        if response.success {
            response
                .data
                .ok_or_else(|| SearchError::Parse("response carried no body".to_string()))
        } else {
            Err(SearchError::Status {
                status: response.status,
                body: response.error_body.unwrap_or_default(),
            })
        }
    }
}
