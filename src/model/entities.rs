use std::{collections::HashMap, fmt::Display, ops::Deref};

use serde::Deserialize;

/// The label given to a repository without a declared language.
pub const NOT_SPECIFIED_LABEL: &str = "Not specified";

/// The language log key under which repositories without a declared language are counted.
pub const NOT_SPECIFIED_KEY: &str = "NOT SPECIFIED";

/// A repository as returned by the search API.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct RepositoryRecord {
    /// The `owner/name` of the repository.
    full_name: String,

    /// The web page of the repository.
    html_url: String,

    /// The primary language detected by the API, if any.
    language: Option<String>,
}

impl RepositoryRecord {
    /// Creates a new `RepositoryRecord` instance.
    pub fn new(full_name: &str, html_url: &str, language: Option<&str>) -> Self {
        Self {
            full_name: full_name.to_string(),
            html_url: html_url.to_string(),
            language: language.map(|language| language.to_string()),
        }
    }

    /// Retrieves the full name of the repository.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Retrieves the web page of the repository.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Returns the declared language, or [NOT_SPECIFIED_LABEL] when it is missing or blank.
    pub fn language_label(&self) -> &str {
        match self.language.as_deref() {
            Some(language) if !language.is_empty() => language,
            _ => NOT_SPECIFIED_LABEL,
        }
    }

    /// Returns `true` if the repository has no declared language.
    pub fn is_language_unspecified(&self) -> bool {
        self.language_label() == NOT_SPECIFIED_LABEL
    }

    /// Returns the language log key of the repository.
    pub fn language_name(&self) -> LanguageName {
        LanguageName::normalize(self.language_label())
    }
}

impl Display for RepositoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Language: {}",
            self.full_name,
            self.language_label()
        )
    }
}

/// The normalized (uppercase) name of a language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageName(String);

impl LanguageName {
    /// Normalizes a raw language string so that case variants share one key.
    pub fn normalize(language: &str) -> Self {
        Self(language.to_uppercase())
    }

    /// Returns `true` if this is the key of repositories without a declared language.
    pub fn is_not_specified(&self) -> bool {
        self.0 == NOT_SPECIFIED_KEY
    }
}

impl Deref for LanguageName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LanguageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occurrence count of each normalized language over one search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageLog {
    counts: HashMap<LanguageName, u32>,
}

impl LanguageLog {
    /// Counts one more repository for `language`.
    pub fn record(&mut self, language: LanguageName) {
        *self.counts.entry(language).or_insert(0) += 1;
    }

    /// Retrieves the count of a language, normalizing the given name first.
    pub fn count(&self, language: &str) -> u32 {
        self.counts
            .get(&LanguageName::normalize(language))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct languages.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no repository was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the languages and their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageName, u32)> {
        self.counts.iter().map(|(language, count)| (language, *count))
    }
}

impl<'a> FromIterator<(&'a str, u32)> for LanguageLog {
    fn from_iter<T: IntoIterator<Item = (&'a str, u32)>>(iter: T) -> Self {
        let mut log = Self::default();
        for (language, count) in iter {
            *log.counts
                .entry(LanguageName::normalize(language))
                .or_insert(0) += count;
        }

        log
    }
}

/// A repository without a declared language, as written to the side file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnspecifiedEntry {
    /// The `owner/name` of the repository.
    pub full_name: String,

    /// The web page of the repository.
    pub url: String,
}

impl From<&RepositoryRecord> for UnspecifiedEntry {
    fn from(repository: &RepositoryRecord) -> Self {
        Self {
            full_name: repository.full_name().to_string(),
            url: repository.html_url().to_string(),
        }
    }
}
