//! # lib_hnsearch
//!
//! Hacker News story search over the public Algolia API, plus the small
//! amount of HTTP and logging plumbing it needs. Modules are gated by
//! features so binaries only pull in what they use:
//!
//! - `retrieve`: `error` and `retrieve::ky_http` (reqwest client wrapper).
//! - `news`: `news::hackernews` (search client, parameters, typed model).
//! - `loggers`: `loggers::loggerlocal` (fern console/file logger).

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Error types shared by the HTTP layer and the search client.
#[cfg(feature = "retrieve")]
pub mod error;
/// Logger installation for binaries.
#[cfg(feature = "loggers")]
pub mod loggers;
/// News provider clients.
#[cfg(feature = "news")]
pub mod news;
/// Generic HTTP retrieval.
#[cfg(feature = "retrieve")]
pub mod retrieve;

#[cfg(feature = "retrieve")]
pub use error::{SearchError, SearchErrorKind};
#[cfg(feature = "news")]
pub use news::hackernews::model::{Hit, SearchResponse};
#[cfg(feature = "news")]
pub use news::hackernews::searchnews::{search_news, NewsSearchClient, SearchOptions};
