//! # Data Retrieval Module
//!
//! Generic HTTP plumbing shared by the API-specific clients in this crate.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: A JSON `ApiClient` built on `reqwest` with a fixed base URL,
//!   per-request query parameters and a bounded timeout. It serves as the
//!   foundation for the Hacker News search client in `news::hackernews`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Generic HTTP API client without retries.
pub mod ky_http;
