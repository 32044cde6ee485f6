//! # Search Errors
//!
//! Error taxonomy shared by the HTTP retrieval layer and the Hacker News
//! search client. Every failure of an outbound search collapses into one
//! [`SearchError`], and each variant maps onto a coarse [`SearchErrorKind`]
//! that callers can branch on without matching the full enum.

use thiserror::Error;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchErrorKind {
    /// The client or request could not be built (bad base URL, TLS backend, ...).
    Config,
    /// Connection refused, DNS failure, reset, or any other transport failure.
    Network,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The server answered with a non-2xx status.
    Status,
    /// The response body was not the JSON the caller asked for.
    Parse,
}

/// Errors produced while issuing a search request.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured base URL or joined request URL is not usable.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// The underlying `reqwest` client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The request exceeded the client timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    /// The server returned a non-success status code.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl SearchError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            SearchError::InvalidUrl(_) | SearchError::Client(_) => SearchErrorKind::Config,
            SearchError::Network(_) => SearchErrorKind::Network,
            SearchError::Timeout(_) => SearchErrorKind::Timeout,
            SearchError::Status { .. } => SearchErrorKind::Status,
            SearchError::Parse(_) => SearchErrorKind::Parse,
        }
    }

    /// Classifies a `reqwest` error raised while building, sending or reading a request.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout(err)
        } else if err.is_decode() {
            SearchError::Parse(err.to_string())
        } else if err.is_builder() {
            SearchError::InvalidUrl(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            SearchError::Network(err)
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_status_kind() {
        let err = SearchError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.kind(), SearchErrorKind::Status);
        assert_eq!(err.to_string(), "unexpected status 503: unavailable");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SearchError::from(json_err);
        assert_eq!(err.kind(), SearchErrorKind::Parse);
    }

    #[test]
    fn invalid_url_is_a_config_problem() {
        assert_eq!(
            SearchError::InvalidUrl("nope".into()).kind(),
            SearchErrorKind::Config
        );
    }
}
