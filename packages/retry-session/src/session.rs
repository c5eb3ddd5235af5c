//! Retrying HTTP session.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, IntoUrl, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::{Result, RetryError};
use crate::policy::RetryPolicy;

/// `reqwest::Client` with a fixed timeout and a retry policy.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RetrySession {
    client: Client,
    policy: RetryPolicy,
}

impl RetrySession {
    /// Create a session whose requests time out after `timeout`.
    pub fn new(timeout: Duration, policy: RetryPolicy) -> Result<Self> {
        Self::with_builder(Client::builder(), timeout, policy)
    }

    /// Create a session from a preconfigured client builder (default headers,
    /// user agent, redirect policy). The timeout is applied on top.
    pub fn with_builder(
        builder: ClientBuilder,
        timeout: Duration,
        policy: RetryPolicy,
    ) -> Result<Self> {
        let client = builder.timeout(timeout).build().map_err(RetryError::Build)?;
        Ok(Self { client, policy })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn get(&self, url: impl IntoUrl) -> RequestBuilder {
        self.client.get(url)
    }

    pub fn post(&self, url: impl IntoUrl) -> RequestBuilder {
        self.client.post(url)
    }

    /// Send a request, retrying transient failures.
    ///
    /// When the final attempt still gets a retryable status, that response is
    /// returned as-is; callers decide what a non-2xx status means for them.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut current = builder.build().map_err(RetryError::Request)?;

        let max_attempts = if self.policy.allows_method(current.method()) {
            self.policy.max_attempts
        } else {
            1
        };

        let mut attempt = 1;
        loop {
            // Streaming bodies can't be cloned; those get a single attempt.
            let retry_copy = if attempt < max_attempts {
                current.try_clone()
            } else {
                None
            };

            let method = current.method().clone();
            let url = current.url().clone();
            debug!(method = %method, url = %url, attempt, "Sending request");

            let result = self.client.execute(current).await;

            let Some(next) = retry_copy else {
                return self.finish(result, attempt);
            };

            let delay = self.policy.delay_for_attempt(attempt);
            match result {
                Ok(response) if self.policy.should_retry_status(response.status()) => {
                    warn!(
                        url = %url,
                        status = %response.status(),
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Retryable status, backing off"
                    );
                }
                Err(e) if self.policy.should_retry_error(&e) => {
                    warn!(
                        url = %url,
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Transient request error, backing off"
                    );
                }
                other => return self.finish(other, attempt),
            }

            tokio::time::sleep(delay).await;
            current = next;
            attempt += 1;
        }
    }

    fn finish(
        &self,
        result: std::result::Result<Response, reqwest::Error>,
        attempts: u32,
    ) -> Result<Response> {
        match result {
            Ok(response) => {
                if self.policy.should_retry_status(response.status()) && attempts > 1 {
                    warn!(status = %response.status(), attempts, "Retries exhausted");
                }
                Ok(response)
            }
            Err(source) => Err(RetryError::Transport { attempts, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn fast_session() -> RetrySession {
        let policy = RetryPolicy::default().with_base_delay(Duration::from_millis(5));
        RetrySession::new(Duration::from_secs(5), policy).unwrap()
    }

    #[tokio::test]
    async fn test_success_is_single_attempt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let session = fast_session();
        let response = session.send(session.get(server.url())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_retryable_status_exhausts_attempts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let session = fast_session();
        let response = session.send(session.get(server.url())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_is_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/submit")
            .with_status(429)
            .expect(3)
            .create_async()
            .await;

        let session = fast_session();
        let url = format!("{}/submit", server.url());
        let response = session
            .send(session.post(url).body("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_retryable_status_returns_immediately() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let session = fast_session();
        let url = format!("{}/missing", server.url());
        let response = session.send(session.get(url)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_method_outside_policy_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let session = fast_session();
        let response = session
            .send(session.client().put(server.url()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_error_surfaces_after_retries() {
        // Nothing listens on port 1
        let session = fast_session();
        let err = session
            .send(session.get("http://127.0.0.1:1/"))
            .await
            .unwrap_err();

        match err {
            RetryError::Transport { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
