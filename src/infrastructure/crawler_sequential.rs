use std::sync::Arc;

use indicatif::ProgressBar;
use log::{info, warn};

use crate::{
    CrawlReport, FetcherError, LanguageCrawler, SearchFetcher, SearchRequest, StdResult,
    UnspecifiedPersister,
};

/// A crawler walking the search result pages one after the other
pub struct SequentialCrawler {
    fetcher: Arc<dyn SearchFetcher>,
    persister: Arc<dyn UnspecifiedPersister>,
    progress: ProgressBar,
}

impl SequentialCrawler {
    /// Creates a new `SequentialCrawler` instance with the given fetcher and persister.
    pub fn new(
        fetcher: Arc<dyn SearchFetcher>,
        persister: Arc<dyn UnspecifiedPersister>,
    ) -> Self {
        Self {
            fetcher,
            persister,
            progress: ProgressBar::hidden(),
        }
    }

    /// Displays the running repository count on the given progress bar.
    pub fn with_progress_bar(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Walks the pages until no next page is advertised or a page is refused.
    async fn fetch_all_pages(&self, search_term: &str, report: &mut CrawlReport) -> StdResult<()> {
        let mut request = SearchRequest::new(search_term);
        loop {
            info!("Processing request: {request}");
            match self.fetcher.fetch(&request).await {
                Ok(page) => {
                    report.add_page(&page)?;
                    self.progress.inc(u64::try_from(page.repositories().len())?);
                    if !page.has_next_page() {
                        return Ok(());
                    }
                    request = request.next_page();
                }
                Err(FetcherError::Status(status)) => {
                    warn!("Stopping at page {}: status {status}", request.page());
                    self.progress
                        .suspend(|| println!("Failed to retrieve repositories: {status}"));
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[async_trait::async_trait]
impl LanguageCrawler for SequentialCrawler {
    async fn crawl(&self, search_term: &str) -> StdResult<CrawlReport> {
        let mut report = CrawlReport::default();
        let fetched = self.fetch_all_pages(search_term, &mut report).await;
        self.progress.finish_and_clear();
        fetched?;
        info!(
            "Fetched {} repositories in {} languages",
            report.total_repositories,
            report.language_log.len()
        );

        let total_persisted = self.persister.persist(&report.unspecified).await?;
        println!(
            "\nSaved {total_persisted} 'Not Specified' repositories to '{}'.",
            self.persister.location()
        );

        Ok(report)
    }
}
