//! Error types for the retry session.

use thiserror::Error;

/// Result type for retry session operations.
pub type Result<T> = std::result::Result<T, RetryError>;

/// Retry session errors.
#[derive(Debug, Error)]
pub enum RetryError {
    /// The underlying client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be built (invalid URL, bad header, ...)
    #[error("invalid request: {0}")]
    Request(#[source] reqwest::Error),

    /// Transport failure on the final attempt
    #[error("request failed after {attempts} attempt(s): {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
}

impl RetryError {
    /// True when the final failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RetryError::Transport { source, .. } if source.is_timeout())
    }
}
