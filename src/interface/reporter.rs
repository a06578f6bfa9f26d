use log::info;

use crate::{CrawlReport, LanguageLog, StdResult};

/// A trait for rendering the language distribution of a crawl.
#[cfg_attr(test, mockall::automock)]
pub trait DistributionReporter {
    /// Reports the distribution of `language_log` over `total_repositories`.
    ///
    /// Returns `false` when there was nothing to report.
    fn report(&self, language_log: &LanguageLog, total_repositories: u32) -> StdResult<bool>;
}

/// Hands a crawl to the reporter, unless no repository was found.
pub fn report_crawl(reporter: &dyn DistributionReporter, crawl: &CrawlReport) -> StdResult<bool> {
    if crawl.language_log.is_empty() {
        info!("No repositories found, skipping the language distribution");
        return Ok(false);
    }

    reporter.report(&crawl.language_log, crawl.total_repositories)
}
