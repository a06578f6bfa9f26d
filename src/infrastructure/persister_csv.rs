use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::info;

use crate::{StdResult, UnspecifiedEntry, UnspecifiedPersister};

/// The default location of the repositories without a declared language.
pub const DEFAULT_UNSPECIFIED_CSV_PATH: &str = "not_specified_repos.csv";

const CSV_HEADER: &str = "full_name,url";

/// A persister that writes repositories without a declared language to a CSV file.
pub struct CsvPersister {
    path: PathBuf,
}

impl CsvPersister {
    /// Creates a new `CsvPersister` instance writing to `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn format(entries: &[UnspecifiedEntry]) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');
        for entry in entries {
            let _ = writeln!(
                out,
                "{},{}",
                escape_field(&entry.full_name),
                escape_field(&entry.url)
            );
        }

        out
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[async_trait::async_trait]
impl UnspecifiedPersister for CsvPersister {
    async fn persist(&self, entries: &[UnspecifiedEntry]) -> StdResult<u32> {
        tokio::fs::write(&self.path, Self::format(entries))
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!("Wrote {} entries to {}", entries.len(), self.path.display());

        Ok(u32::try_from(entries.len())?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
