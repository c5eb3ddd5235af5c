//! HTTP session with bounded retry.
//!
//! A thin wrapper around `reqwest::Client` that applies a fixed overall
//! timeout and retries transient failures (connection errors, timeouts and a
//! configurable set of HTTP statuses) with exponential backoff.
//!
//! # Example
//!
//! ```rust,ignore
//! use retry_session::{RetryPolicy, RetrySession};
//! use std::time::Duration;
//!
//! let session = RetrySession::new(Duration::from_secs(15), RetryPolicy::default())?;
//! let response = session.send(session.get("https://example.com")).await?;
//! ```

pub mod error;
pub mod policy;
pub mod session;

pub use error::{Result, RetryError};
pub use policy::RetryPolicy;
pub use session::RetrySession;
