use std::fmt::Display;

use serde::Serialize;

/// The number of results requested per page (maximum allowed by the search API).
pub const RESULTS_PER_PAGE: u16 = 100;

/// Sort key used for repository search.
pub const SORT_BY_STARS: &str = "stars";

/// Sort direction used for repository search.
pub const ORDER_DESCENDING: &str = "desc";

/// A repository search request for one page of results.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct SearchRequest {
    /// The text query.
    #[serde(rename = "q")]
    pub(crate) query: String,

    /// The number of repositories to return.
    pub(crate) per_page: u16,

    /// The sort key.
    pub(crate) sort: String,

    /// The sort direction.
    pub(crate) order: String,

    /// The 1-based page number.
    pub(crate) page: u32,
}

impl SearchRequest {
    /// Creates the request for the first page of `query`, sorted by descending stars.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            per_page: RESULTS_PER_PAGE,
            sort: SORT_BY_STARS.to_string(),
            order: ORDER_DESCENDING.to_string(),
            page: 1,
        }
    }

    /// Returns the request for the following page.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    /// Retrieves the text query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Retrieves the page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Creates a dummy `SearchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("dummy")
    }
}

impl Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchRequest: query={}, per_page={}, sort={}, order={}, page={}",
            self.query, self.per_page, self.sort, self.order, self.page
        )
    }
}
