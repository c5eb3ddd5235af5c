//! Request payloads for the analysis endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}
