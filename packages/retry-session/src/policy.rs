//! Retry policy for HTTP requests.

use std::time::Duration;

use reqwest::{Method, StatusCode};

/// Statuses treated as transient by default.
pub const DEFAULT_RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Strategy for retrying failed requests.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt; doubled for each later one.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
    /// Response statuses that trigger a retry.
    pub retry_statuses: Vec<StatusCode>,
    /// Methods that may be retried. Anything else gets a single attempt.
    pub retry_methods: Vec<Method>,
}

impl RetryPolicy {
    /// Creates a policy with the given number of attempts and default backoff.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            retry_statuses: DEFAULT_RETRY_STATUSES
                .iter()
                .filter_map(|code| StatusCode::from_u16(*code).ok())
                .collect(),
            retry_methods: vec![Method::GET, Method::POST],
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self::new(1)
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Sets the maximum delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Calculates the delay to wait after the given (1-based) failed attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    pub fn should_retry_status(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Determines if a request error should be retried.
    pub fn should_retry_error(&self, error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }

    pub fn allows_method(&self, method: &Method) -> bool {
        self.retry_methods.contains(method)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}
