// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BasePageFetcher, BaseSummarizer, ServerDeps};
use crate::common::{Audience, FetchError, SummarizationError, WebsiteAnalysis};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

pub struct MockPageFetcher {
    responses: Arc<Mutex<Vec<Result<String, FetchError>>>>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an HTML document to be returned
    pub fn with_html(self, html: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(html.to_string()));
        self
    }

    /// Queue a failure to be returned
    pub fn with_error(self, error: FetchError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// URLs passed to `fetch`, in call order
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

impl Default for MockPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok("<html><head><title>Mock Page</title></head>\
                <body><p>This is mock page content.</p></body></html>"
                .to_string())
        }
    }
}

// =============================================================================
// Mock Summarizer
// =============================================================================

/// Arguments captured from a summarize call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeCallArgs {
    pub title: String,
    pub content: String,
}

pub struct MockSummarizer {
    responses: Arc<Mutex<Vec<Result<WebsiteAnalysis, SummarizationError>>>>,
    summarize_calls: Arc<Mutex<Vec<SummarizeCallArgs>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an analysis to be returned
    pub fn with_analysis(self, analysis: WebsiteAnalysis) -> Self {
        self.responses.lock().unwrap().push(Ok(analysis));
        self
    }

    /// Queue a failure to be returned
    pub fn with_error(self, error: SummarizationError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn summarize_calls(&self) -> Vec<SummarizeCallArgs> {
        self.summarize_calls.lock().unwrap().clone()
    }

    /// Analysis returned when nothing was queued
    pub fn default_analysis() -> WebsiteAnalysis {
        WebsiteAnalysis {
            business_intro: "Mock business.".to_string(),
            core_selling_points: (1..=5).map(|i| format!("Selling point {}", i)).collect(),
            core_audiences: (1..=3)
                .map(|i| Audience {
                    title: format!("Audience {}", i),
                    description: format!("Audience {} description", i),
                })
                .collect(),
            error: None,
        }
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSummarizer for MockSummarizer {
    async fn summarize(
        &self,
        title: &str,
        content: &str,
    ) -> Result<WebsiteAnalysis, SummarizationError> {
        self.summarize_calls.lock().unwrap().push(SummarizeCallArgs {
            title: title.to_string(),
            content: content.to_string(),
        });

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(Self::default_analysis())
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub page_fetcher: Arc<MockPageFetcher>,
    pub summarizer: Arc<MockSummarizer>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            page_fetcher: Arc::new(MockPageFetcher::new()),
            summarizer: Arc::new(MockSummarizer::new()),
        }
    }

    /// Set a mock page fetcher
    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.page_fetcher = Arc::new(fetcher);
        self
    }

    /// Set a mock summarizer
    pub fn mock_summarizer(mut self, summarizer: MockSummarizer) -> Self {
        self.summarizer = Arc::new(summarizer);
        self
    }

    /// Convert into ServerDeps; the mocks stay inspectable through `self`
    pub fn to_deps(&self) -> ServerDeps {
        ServerDeps::new(self.page_fetcher.clone(), self.summarizer.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
