use crate::{FetcherError, SearchPage, SearchRequest};

/// A trait for fetching one page of repository search results from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchFetcher: Sync + Send {
    /// Fetches the page of results described by the request.
    async fn fetch(&self, request: &SearchRequest) -> Result<SearchPage, FetcherError>;
}
