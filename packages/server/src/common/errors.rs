//! Typed errors for the fetch → extract → summarize pipeline stages.

use thiserror::Error;

/// The page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Network failure, timeout or DNS failure (after retries)
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Non-2xx status (after retries)
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// The fetched document could not be parsed.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },
}

/// The model call failed or its reply was unusable.
#[derive(Debug, Error)]
pub enum SummarizationError {
    /// Chat completion API answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Transport failure or malformed envelope from the API
    #[error("{0}")]
    Client(String),

    /// The model's reply was not a valid analysis object, even after
    /// stripping code fences
    #[error("invalid model output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

impl From<openai_client::OpenAIError> for SummarizationError {
    fn from(err: openai_client::OpenAIError) -> Self {
        match err {
            openai_client::OpenAIError::Api { status, body } => {
                SummarizationError::Upstream { status, body }
            }
            other => SummarizationError::Client(other.to_string()),
        }
    }
}
