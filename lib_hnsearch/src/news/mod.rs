//! # News Source APIs Module
//!
//! Groups the clients for external news providers. Each provider lives in its
//! own submodule and builds on the shared `retrieve` layer.
//!
//! ## Contained Modules:
//!
//! - **`hackernews`**: story search against the Hacker News search API.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Client for the Hacker News search API.
pub mod hackernews;
