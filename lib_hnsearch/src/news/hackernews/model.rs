//! # Hacker News Search Data Model
//!
//! Typed view of the Algolia `search_by_date` response. The raw
//! `serde_json::Value` returned by [`NewsSearchClient::search_news`] stays the
//! primary contract; these structs are for callers that want fields instead of
//! JSON paths. Unknown fields are ignored so additions on the API side do not
//! break deserialization.
//!
//! [`NewsSearchClient::search_news`]: super::searchnews::NewsSearchClient::search_news

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Base URL of the Hacker News item page for a story id.
pub const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching stories, newest first.
    pub hits: Vec<Hit>,
    /// Total number of matches across all pages.
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Number of pages available.
    #[serde(rename = "nbPages", default)]
    pub nb_pages: u64,
    /// Page size the server applied.
    #[serde(rename = "hitsPerPage", default)]
    pub hits_per_page: u64,
    /// Query as echoed by the server.
    #[serde(default)]
    pub query: Option<String>,
    /// Encoded parameter string as echoed by the server.
    #[serde(default)]
    pub params: Option<String>,
    /// Server-side processing time.
    #[serde(rename = "processingTimeMS", default)]
    pub processing_time_ms: Option<u64>,
    /// Whether `nb_hits` is exact.
    #[serde(rename = "exhaustiveNbHits", default)]
    pub exhaustive_nb_hits: Option<bool>,
}

/// A single matching story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Hacker News item id.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Story title.
    pub title: Option<String>,
    /// Submitted link; `None` for text posts.
    pub url: Option<String>,
    /// Submitter's username.
    pub author: Option<String>,
    /// Score at indexing time.
    pub points: Option<u64>,
    /// Comment count at indexing time.
    pub num_comments: Option<u64>,
    /// ISO-8601 creation time as sent by the API.
    pub created_at: Option<String>,
    /// Creation time in Unix seconds.
    pub created_at_i: Option<i64>,
    /// Body of a text post, as HTML.
    pub story_text: Option<String>,
    /// Algolia tags such as `story` and `author_<name>`.
    #[serde(rename = "_tags", default)]
    pub tags: Vec<String>,
}

impl Hit {
    /// Link to the story's discussion page on news.ycombinator.com.
    pub fn discussion_url(&self) -> String {
        format!("{ITEM_URL}{}", self.object_id)
    }

    /// The submitted link, or the discussion page for text posts.
    pub fn link(&self) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.discussion_url(),
        }
    }

    /// Creation time, if the API sent a valid Unix timestamp.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at_i
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

impl SearchResponse {
    /// True when the page carries no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
