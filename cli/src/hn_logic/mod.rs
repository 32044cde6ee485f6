/// Layered CLI / env / file configuration.
pub mod config;
/// Rendering of search results.
pub mod output;
