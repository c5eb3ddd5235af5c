//! Request-level error for the analysis pipeline.
//!
//! Each stage error keeps its own type; this enum only decides the HTTP
//! status and the client-facing message prefix.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::common::{ExtractionError, FetchError, SummarizationError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Unable to access website: {0}")]
    Fetch(#[from] FetchError),

    #[error("Content extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("AI processing failed: {0}")]
    Summarization(#[from] SummarizationError),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::Fetch(_) | AnalysisError::Extraction(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Summarization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            error!(status = %status, error = %detail, "Analysis request failed");
        } else {
            warn!(status = %status, error = %detail, "Analysis request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_are_client_errors() {
        let err = AnalysisError::from(FetchError::Status {
            url: "https://example.com".to_string(),
            status: 503,
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Unable to access website: HTTP 503 for https://example.com"
        );
    }

    #[test]
    fn test_extraction_errors_are_client_errors() {
        let err = AnalysisError::from(ExtractionError::Selector {
            selector: "p".to_string(),
            message: "bad".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Content extraction failed: "));
    }

    #[test]
    fn test_upstream_errors_are_server_errors() {
        let err = AnalysisError::from(SummarizationError::Upstream {
            status: 401,
            body: "Authentication Fails".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "AI processing failed: API error (401): Authentication Fails"
        );
    }

    #[tokio::test]
    async fn test_response_body_carries_detail() {
        let response = AnalysisError::from(SummarizationError::Client("timed out".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "AI processing failed: timed out");
    }
}
