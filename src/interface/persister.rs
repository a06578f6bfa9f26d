use crate::{StdResult, UnspecifiedEntry};

/// A trait for persisting the repositories without a declared language.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UnspecifiedPersister: Sync + Send {
    /// Replaces any previously persisted entries, returns the number of entries written.
    async fn persist(&self, entries: &[UnspecifiedEntry]) -> StdResult<u32>;

    /// A human readable location of the persisted entries.
    fn location(&self) -> String;
}
