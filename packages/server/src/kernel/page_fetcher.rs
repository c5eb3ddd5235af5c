//! Page fetcher - retrieves raw HTML over HTTP
//!
//! This implementation:
//! - Prepends `https://` when the URL has no scheme
//! - Sends browser-like headers to avoid trivial bot blocking
//! - Retries connection errors and 429/5xx via `RetrySession`
//!
//! Limitations:
//! - No JavaScript rendering (static HTML only)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};
use retry_session::{RetryError, RetryPolicy, RetrySession};
use tracing::{debug, info, warn};
use url::Url;

use super::BasePageFetcher;
use crate::common::FetchError;

/// Browser User-Agent sent with every page request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Overall timeout for a single page request
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Page fetcher using reqwest behind a retry session
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self {
            timeout: FETCH_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize URL by adding https:// if no scheme is present
    pub fn normalize_url(url: &str) -> String {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    /// Normalize and validate a user-supplied URL.
    pub fn parse_target(url: &str) -> Result<Url, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let normalized = Self::normalize_url(url);
        match Url::parse(&normalized) {
            Ok(parsed) if parsed.host_str().is_some() => Ok(parsed),
            _ => Err(FetchError::InvalidUrl { url: normalized }),
        }
    }

    /// Build a fresh session for one fetch.
    fn session(&self) -> Result<RetrySession, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10));

        RetrySession::with_builder(builder, self.timeout, self.retry_policy.clone())
            .map_err(|e| FetchError::Client(e.to_string()))
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = Self::parse_target(url)?;
        let url = target.to_string();
        info!(url = %url, "Fetching page");

        let session = self.session()?;
        let response = session
            .send(session.get(target))
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Page request failed");
                match e {
                    RetryError::Request(_) => FetchError::InvalidUrl { url: url.clone() },
                    RetryError::Build(e) => FetchError::Client(e.to_string()),
                    other => FetchError::Network {
                        url: url.clone(),
                        message: other.to_string(),
                    },
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Page returned error status");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            message: format!("failed to read response body: {}", e),
        })?;

        debug!(url = %url, bytes = html.len(), "Fetched page");
        Ok(html)
    }
}
