use std::fmt::Display;

use super::{LanguageLog, LanguageName};

/// Languages below this share of all repositories are grouped under "Other".
pub const OTHER_THRESHOLD_PERCENTAGE: f64 = 2.0;

/// The share of one language among all repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    /// The normalized language name.
    pub language: LanguageName,

    /// The number of repositories using the language.
    pub count: u32,

    /// `100 * count / total`
    pub percentage: f64,
}

impl LanguageShare {
    fn new(language: LanguageName, count: u32, total: u32) -> Self {
        Self {
            language,
            count,
            percentage: percentage(count, total),
        }
    }
}

impl Display for LanguageShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.2}% ({} repositories)",
            self.language, self.percentage, self.count
        )
    }
}

/// Languages individually below [OTHER_THRESHOLD_PERCENTAGE].
#[derive(Debug, Clone, PartialEq)]
pub struct OtherBucket {
    /// Aggregated number of repositories.
    pub count: u32,

    /// Aggregated share.
    pub percentage: f64,

    /// The languages composing the bucket.
    pub constituents: Vec<LanguageShare>,
}

/// The language distribution of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDistribution {
    /// Total repositories the shares are computed against.
    pub total: u32,

    /// Languages at or above the threshold, plus "NOT SPECIFIED" whatever its share.
    pub significant: Vec<LanguageShare>,

    /// Repositories without a declared language, repeated on their own line.
    pub not_specified: Option<LanguageShare>,

    /// Languages below the threshold, if any.
    pub other: Option<OtherBucket>,
}

impl LanguageDistribution {
    /// Computes the distribution of `log` over `total` repositories.
    ///
    /// Returns `None` when there is nothing to distribute, which keeps the
    /// percentage computation away from a zero total.
    pub fn compute(log: &LanguageLog, total: u32) -> Option<Self> {
        if log.is_empty() || total == 0 {
            return None;
        }

        let mut significant = vec![];
        let mut not_specified = None;
        let mut constituents = vec![];
        for (language, count) in log.iter() {
            let share = LanguageShare::new(language.to_owned(), count, total);
            if language.is_not_specified() {
                not_specified = Some(share.clone());
                significant.push(share);
            } else if share.percentage < OTHER_THRESHOLD_PERCENTAGE {
                constituents.push(share);
            } else {
                significant.push(share);
            }
        }
        sort_shares(&mut significant);
        sort_shares(&mut constituents);

        let other_count: u32 = constituents.iter().map(|share| share.count).sum();
        let other = (other_count > 0).then(|| OtherBucket {
            count: other_count,
            percentage: percentage(other_count, total),
            constituents,
        });

        Some(Self {
            total,
            significant,
            not_specified,
            other,
        })
    }
}

impl Display for LanguageDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Language distribution:")?;
        for share in &self.significant {
            writeln!(f, "{share}")?;
        }
        if let Some(share) = &self.not_specified {
            writeln!(f, "{share}")?;
        }
        if let Some(other) = &self.other {
            writeln!(
                f,
                "Other: {:.2}% ({} repositories)",
                other.percentage, other.count
            )?;
            writeln!(f, "Composed of:")?;
            for share in &other.constituents {
                writeln!(f, "  - {share}")?;
            }
        }

        Ok(())
    }
}

fn percentage(count: u32, total: u32) -> f64 {
    100.0 * f64::from(count) / f64::from(total)
}

// Descending count, then name, so that the report is reproducible.
fn sort_shares(shares: &mut [LanguageShare]) {
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.language.cmp(&b.language))
    });
}
