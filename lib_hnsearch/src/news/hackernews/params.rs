//! Query parameters for the `search_by_date` endpoint.

use serde::Serialize;

/// Endpoint path, relative to the API base URL.
pub const SEARCH_BY_DATE_PATH: &str = "search_by_date";

/// Only the title attribute is searched.
pub const RESTRICT_TO_TITLE: &str = "title";

/// Only items tagged as stories are returned.
pub const STORY_TAG: &str = "story";

/// Upper bound on hits returned by one request.
pub const HITS_PER_PAGE: u32 = 100;

/// Excludes stories that also carry a meta-discussion, poll or comment tag.
pub const STORY_FILTERS: &str =
    "NOT _tags:ask_hn AND NOT _tags:show_hn AND NOT _tags:poll AND NOT _tags:comment";

/// The full parameter set sent with every title search.
///
/// Only `query` depends on caller input; everything else is fixed.
/// Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    query: String,
    restrict_searchable_attributes: &'static str,
    tags: &'static str,
    hits_per_page: u32,
    filters: &'static str,
}

impl SearchParams {
    /// Exact-phrase title search for `query`.
    ///
    /// The input is not validated or escaped; it is wrapped in double quotes as is,
    /// so an empty query becomes `""`.
    pub fn for_title(query: &str) -> Self {
        Self {
            query: format!("\"{query}\""),
            restrict_searchable_attributes: RESTRICT_TO_TITLE,
            tags: STORY_TAG,
            hits_per_page: HITS_PER_PAGE,
            filters: STORY_FILTERS,
        }
    }

    /// The quoted query as it goes on the wire.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hits requested per page.
    pub fn hits_per_page(&self) -> u32 {
        self.hits_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_wrapped_in_double_quotes() {
        let params = SearchParams::for_title("rust programming");
        assert_eq!(params.query(), "\"rust programming\"");
        assert_eq!(params.hits_per_page(), 100);
    }

    #[test]
    fn empty_query_is_sent_as_empty_phrase() {
        assert_eq!(SearchParams::for_title("").query(), "\"\"");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        assert_eq!(SearchParams::for_title("say \"hi\"").query(), "\"say \"hi\"\"");
    }

    #[test]
    fn serializes_with_api_field_names() {
        let value = serde_json::to_value(SearchParams::for_title("tokio")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "query": "\"tokio\"",
                "restrictSearchableAttributes": "title",
                "tags": "story",
                "hitsPerPage": 100,
                "filters": "NOT _tags:ask_hn AND NOT _tags:show_hn AND NOT _tags:poll AND NOT _tags:comment",
            })
        );
    }
}
