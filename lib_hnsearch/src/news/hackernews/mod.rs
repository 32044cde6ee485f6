//! # Hacker News Search Integration Module
//!
//! Client logic and data structures for the Algolia-hosted Hacker News search
//! API (`search_by_date`).
//!
//! ## Contained Modules:
//!
//! - **`params`**: the fixed parameter set of a story title search.
//! - **`apicallhn`**: the low-level endpoint caller on top of `ApiClient`.
//! - **`model`**: typed response structures (`SearchResponse`, `Hit`).
//! - **`searchnews`**: `NewsSearchClient`, the public search entry points.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Client for making HTTP requests to the Hacker News search API.
pub mod apicallhn;
/// Typed response model.
pub mod model;
/// Query parameters for `search_by_date`.
pub mod params;
/// Story title search client.
pub mod searchnews;
