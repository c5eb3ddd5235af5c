use axum::{extract::Extension, Json};

use crate::common::WebsiteAnalysis;
use crate::domains::analysis::{analyze_website, AnalysisError, AnalysisRequest};
use crate::server::app::AxumAppState;

/// `POST /api/analyze`
pub async fn analyze_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<WebsiteAnalysis>, AnalysisError> {
    let analysis = analyze_website(&state.server_deps, &request.url).await?;
    Ok(Json(analysis))
}
