//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the dependency container shared by all routes.
//! All external services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BasePageFetcher, BaseSummarizer, DeepSeekSummarizer, HttpPageFetcher};

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub page_fetcher: Arc<dyn BasePageFetcher>,
    pub summarizer: Arc<dyn BaseSummarizer>,
}

impl ServerDeps {
    pub fn new(
        page_fetcher: Arc<dyn BasePageFetcher>,
        summarizer: Arc<dyn BaseSummarizer>,
    ) -> Self {
        Self {
            page_fetcher,
            summarizer,
        }
    }

    /// Production dependencies: real HTTP fetcher and DeepSeek summarizer.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HttpPageFetcher::new()),
            Arc::new(DeepSeekSummarizer::new(config.deepseek_api_key.clone())),
        )
    }
}
