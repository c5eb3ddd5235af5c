// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The analysis pipeline is a domain function that uses these traits.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher, BaseSummarizer)

use async_trait::async_trait;

use crate::common::{FetchError, SummarizationError, WebsiteAnalysis};

// =============================================================================
// Page Fetcher Trait (Infrastructure - HTTP retrieval)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch the raw document at `url`. A URL without scheme is treated as https.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// =============================================================================
// Summarizer Trait (Infrastructure - LLM)
// =============================================================================

#[async_trait]
pub trait BaseSummarizer: Send + Sync {
    /// Produce a marketing brief from a page title and its main content
    async fn summarize(
        &self,
        title: &str,
        content: &str,
    ) -> Result<WebsiteAnalysis, SummarizationError>;
}
