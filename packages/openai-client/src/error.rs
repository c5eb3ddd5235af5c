//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The API answered 2xx but without any choice
    #[error("No response from model")]
    EmptyResponse,
}

impl OpenAIError {
    /// Upstream HTTP status, when the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            OpenAIError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<retry_session::RetryError> for OpenAIError {
    fn from(err: retry_session::RetryError) -> Self {
        match err {
            retry_session::RetryError::Build(e) => OpenAIError::Config(e.to_string()),
            other => OpenAIError::Network(other.to_string()),
        }
    }
}
