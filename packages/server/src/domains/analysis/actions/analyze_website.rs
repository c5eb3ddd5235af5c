use tracing::info;

use crate::common::WebsiteAnalysis;
use crate::domains::analysis::AnalysisError;
use crate::kernel::{extract_content, ServerDeps};

/// Fetch a page, extract its main text and ask the model for a marketing brief.
///
/// Stages run strictly in order; the first failure aborts the request.
pub async fn analyze_website(
    deps: &ServerDeps,
    url: &str,
) -> Result<WebsiteAnalysis, AnalysisError> {
    info!(url = %url, "Analyzing website");

    let html = deps.page_fetcher.fetch(url).await?;
    info!(url = %url, bytes = html.len(), "Page fetched");

    let extracted = extract_content(&html)?;
    info!(
        title = %extracted.title,
        content_chars = extracted.content.chars().count(),
        "Content extracted"
    );

    let analysis = deps
        .summarizer
        .summarize(&extracted.title, &extracted.content)
        .await?;
    info!(
        url = %url,
        selling_points = analysis.core_selling_points.len(),
        audiences = analysis.core_audiences.len(),
        "Website analysis complete"
    );

    Ok(analysis)
}
