use crate::{CrawlReport, StdResult};

/// A trait for tallying the languages of every repository matching a search term.
#[async_trait::async_trait]
pub trait LanguageCrawler {
    /// Crawl all result pages for the search term.
    async fn crawl(&self, search_term: &str) -> StdResult<CrawlReport>;
}
