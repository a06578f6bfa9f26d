use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FetcherError {
    /// The API answered with a non-success HTTP status
    #[error("Unexpected status code: {0}")]
    Status(u16),
    /// The request could not be sent or its body could not be read
    #[error("Remote error: {0}")]
    Remote(String),
    /// The response body does not have the expected shape
    #[error("Parsing error: {0}")]
    Parse(String),
}
