//! Request admission control for LLM API quotas.
//!
//! This crate enforces a rolling one-minute request quota shared by every
//! caller in the process. A single [`RateLimiter`] handle is constructed at
//! startup (usually from the `REQUESTS_PER_MINUTE` setting) and cloned into
//! every component that talks to a provider. Clones share one quota window.
//!
//! Admission is available under both concurrency disciplines:
//! - [`RateLimiter::acquire`] suspends the calling task while it waits
//! - [`RateLimiter::acquire_blocking`] parks the calling thread
//!
//! Both paths serialize on the same lock, so sync and async callers may be
//! mixed freely.
//!
//! ```no_run
//! use tollgate_rate_limit::RateLimiter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let limiter = RateLimiter::from_env()?;
//! limiter.acquire().await;
//! // make the API call...
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod limiter;
mod quota;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RateLimitConfig, REQUESTS_PER_MINUTE_VAR};
pub use limiter::{RETRY_BUFFER, RateLimiter};
pub use quota::{QUOTA_WINDOW, QuotaWindow};

/// Trait for errors that can be classified as retryable or permanent.
///
/// [`RateLimiter::execute`] uses this to decide whether a failed attempt
/// should be retried with exponential backoff or returned immediately.
///
/// # Example
///
/// ```rust,ignore
/// impl RetryableError for MyError {
///     fn is_retryable(&self) -> bool {
///         match self {
///             MyError::NetworkTimeout => true,
///             MyError::RateLimit => true,
///             MyError::InvalidApiKey => false,
///         }
///     }
/// }
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network timeouts should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for tollgate_error::ModelsError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
