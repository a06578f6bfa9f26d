use anyhow::anyhow;

use super::{LanguageLog, RepositoryRecord, StdResult, UnspecifiedEntry};

/// One page of search results.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchPage {
    /// Repositories returned on this page
    pub(crate) repositories: Vec<RepositoryRecord>,

    /// Whether the API advertised a next page
    pub(crate) has_next_page: bool,
}

impl SearchPage {
    /// Creates a new `SearchPage` instance.
    pub fn new(repositories: Vec<RepositoryRecord>, has_next_page: bool) -> Self {
        Self {
            repositories,
            has_next_page,
        }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    /// Returns `true` if another page can be requested.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }
}

/// The outcome of crawling every page of a search.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Repositories counted per normalized language.
    pub language_log: LanguageLog,

    /// Repositories seen across all successfully fetched pages.
    pub total_repositories: u32,

    /// Repositories without a declared language, in fetch order.
    pub unspecified: Vec<UnspecifiedEntry>,
}

impl CrawlReport {
    /// Accounts for one page of results.
    ///
    /// The page is either fully counted or not counted at all.
    pub fn add_page(&mut self, page: &SearchPage) -> StdResult<()> {
        let total_repositories = u32::try_from(page.repositories().len())
            .ok()
            .and_then(|page_size| self.total_repositories.checked_add(page_size))
            .ok_or_else(|| {
                anyhow!(
                    "Repository count overflow: {} + {}",
                    self.total_repositories,
                    page.repositories().len()
                )
            })?;
        self.total_repositories = total_repositories;
        for repository in page.repositories() {
            if repository.is_language_unspecified() {
                self.unspecified.push(repository.into());
            }
            self.language_log.record(repository.language_name());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{NOT_SPECIFIED_KEY, RepositoryRecord};

    use super::*;

    fn page_with_languages(languages: &[Option<&str>], has_next_page: bool) -> SearchPage {
        SearchPage::new(
            languages
                .iter()
                .enumerate()
                .map(|(i, language)| {
                    RepositoryRecord::new(
                        &format!("org/repository-{i}"),
                        &format!("https://github.com/org/repository-{i}"),
                        *language,
                    )
                })
                .collect(),
            has_next_page,
        )
    }

    #[test]
    fn add_page_keeps_total_equal_to_log_sum() {
        let mut report = CrawlReport::default();

        report
            .add_page(&page_with_languages(
                &[Some("Rust"), Some("rust"), None],
                true,
            ))
            .unwrap();
        report
            .add_page(&page_with_languages(&[Some("Go"), None], false))
            .unwrap();

        assert_eq!(report.total_repositories, 5);
        assert_eq!(report.language_log.total(), 5);
        assert_eq!(report.language_log.count("RUST"), 2);
        assert_eq!(report.language_log.count("GO"), 1);
    }

    #[test]
    fn add_page_collects_unspecified_entries() {
        let mut report = CrawlReport::default();

        report
            .add_page(&page_with_languages(&[None, Some("C"), None], false))
            .unwrap();

        assert_eq!(
            vec![
                UnspecifiedEntry {
                    full_name: "org/repository-0".to_string(),
                    url: "https://github.com/org/repository-0".to_string(),
                },
                UnspecifiedEntry {
                    full_name: "org/repository-2".to_string(),
                    url: "https://github.com/org/repository-2".to_string(),
                },
            ],
            report.unspecified
        );
        assert_eq!(
            report.language_log.count(NOT_SPECIFIED_KEY),
            u32::try_from(report.unspecified.len()).unwrap()
        );
    }

    #[test]
    fn add_empty_page_changes_nothing() {
        let mut report = CrawlReport::default();

        report.add_page(&page_with_languages(&[], false)).unwrap();

        assert_eq!(CrawlReport::default(), report);
    }

    #[test]
    fn add_page_fails_without_counting_when_total_overflows() {
        let mut report = CrawlReport {
            total_repositories: u32::MAX,
            ..CrawlReport::default()
        };

        report
            .add_page(&page_with_languages(&[Some("Rust"), None], false))
            .expect_err("Adding a page past the counter capacity should fail");

        assert_eq!(report.total_repositories, u32::MAX);
        assert!(report.language_log.is_empty());
        assert!(report.unspecified.is_empty());
    }
}
