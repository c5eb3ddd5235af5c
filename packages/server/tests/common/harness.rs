//! Test harness driving the router in-process.
//!
//! Either built from mock services, or wired to real HTTP clients pointed at
//! local mockito servers standing in for the target site and the model API.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use openai_client::{OpenAIClient, RetryPolicy};
use server_core::kernel::{DeepSeekSummarizer, HttpPageFetcher, ServerDeps, TestDependencies};
use server_core::server::build_app;
use server_core::DEFAULT_ALLOWED_ORIGINS;
use tower::ServiceExt;

/// Retry policy with the production attempt count but millisecond backoff.
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy::default().with_base_delay(Duration::from_millis(5))
}

pub struct TestHarness {
    app: Router,
}

impl TestHarness {
    fn origins() -> Vec<String> {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
    }

    /// Router backed by mock fetcher and summarizer.
    pub fn with_mocks(deps: &TestDependencies) -> Self {
        Self {
            app: build_app(deps.to_deps(), &Self::origins()),
        }
    }

    /// Router backed by the real fetcher and summarizer; the summarizer talks
    /// to `api_url` instead of DeepSeek.
    pub fn with_model_api(api_url: &str) -> Self {
        let fetcher = HttpPageFetcher::new().with_retry_policy(fast_retry_policy());
        let summarizer = DeepSeekSummarizer::with_client(
            OpenAIClient::new("sk-test")
                .with_base_url(api_url)
                .with_retry_policy(fast_retry_policy()),
        );

        let deps = ServerDeps::new(Arc::new(fetcher), Arc::new(summarizer));
        Self {
            app: build_app(deps, &Self::origins()),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// POST `/api/analyze` with a raw JSON body; returns status and parsed body.
    pub async fn analyze_raw(&self, body: String) -> (StatusCode, Value) {
        let response = self
            .send(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("valid request"),
            )
            .await;
        read_json(response).await
    }

    pub async fn analyze(&self, url: &str) -> (StatusCode, Value) {
        self.analyze_raw(serde_json::json!({ "url": url }).to_string())
            .await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .send(Request::get(path).body(Body::empty()).expect("valid request"))
            .await;
        read_json(response).await
    }
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
