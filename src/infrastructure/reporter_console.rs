use std::{
    io::{self, Write},
    sync::Mutex,
};

use anyhow::anyhow;
use log::debug;

use crate::{DistributionReporter, LanguageDistribution, LanguageLog, StdResult};

/// A reporter printing the language distribution to a writer, standard output by default.
pub struct ConsoleReporter<W: Write> {
    writer: Mutex<W>,
}

impl ConsoleReporter<io::Stdout> {
    /// Creates a new `ConsoleReporter` instance printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a new `ConsoleReporter` instance printing to the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the reporter and returns its writer.
    pub fn into_inner(self) -> StdResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow!("Reporter writer poisoned: {e}"))
    }
}

impl<W: Write> DistributionReporter for ConsoleReporter<W> {
    fn report(&self, language_log: &LanguageLog, total_repositories: u32) -> StdResult<bool> {
        let Some(distribution) = LanguageDistribution::compute(language_log, total_repositories)
        else {
            debug!("Nothing to report");
            return Ok(false);
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow!("Reporter writer poisoned: {e}"))?;
        writeln!(writer, "\nTotal repositories found: {total_repositories}")?;
        write!(writer, "{distribution}")?;
        writer.flush()?;

        Ok(true)
    }
}
