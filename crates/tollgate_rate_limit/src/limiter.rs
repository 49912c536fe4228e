//! Process-wide request admission over a rolling one-minute window.
//!
//! This module provides the `RateLimiter` handle. One limiter is built by the
//! application entry point and cloned into every component that needs rate
//! limiting; all clones share a single [`QuotaWindow`].
//!
//! The window lives behind one `parking_lot::Mutex` that both the async and
//! the blocking entry points use. The lock is held only while pruning and
//! admitting and is always released before sleeping, so a waiting caller
//! never blocks other callers from observing freed capacity.

use crate::{Clock, QuotaWindow, RateLimitConfig, RetryableError, SystemClock};
use parking_lot::Mutex;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tollgate_error::{RateLimitError, RateLimitErrorKind, TollgateResult};
use tracing::{debug, info, instrument, warn};

/// Slack added to every computed wait so a retry never lands exactly on the
/// expiry boundary.
pub const RETRY_BUFFER: Duration = Duration::from_millis(100);

/// Shared rolling-window rate limiter.
///
/// A limiter is either *unlimited* (no capacity configured: admission is
/// immediate and the window is never touched) or *limited* to a fixed number
/// of admissions in any trailing 60 seconds. The mode is fixed at
/// construction.
///
/// No FIFO fairness is provided among waiters.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroU32;
/// use tollgate_rate_limit::{RateLimitConfig, RateLimiter};
///
/// let limiter = RateLimiter::new(&RateLimitConfig::per_minute(NonZeroU32::new(2).unwrap()));
/// let shared = limiter.clone();
///
/// assert!(limiter.try_acquire());
/// assert!(shared.try_acquire());
/// assert!(!limiter.try_acquire());
/// ```
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Inner>,
}

struct Inner {
    capacity: Option<NonZeroU32>,
    window: Mutex<QuotaWindow>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimiter")
            .field("capacity", &self.inner.capacity)
            .field("window_len", &self.window_len())
            .field("clock", &self.inner.clock)
            .finish()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl RateLimiter {
    /// Create a limiter from a resolved configuration.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a limiter that reads time from `clock`.
    pub fn with_clock(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        let capacity = config.requests_per_minute();
        match capacity {
            Some(rpm) => info!(requests_per_minute = rpm.get(), "Rate limiter initialized"),
            None => info!("Rate limiter initialized with no limit"),
        }

        Self {
            inner: Arc::new(Inner {
                capacity,
                window: Mutex::new(QuotaWindow::new()),
                clock,
            }),
        }
    }

    /// A limiter that admits everything immediately.
    pub fn unlimited() -> Self {
        Self::new(&RateLimitConfig::unlimited())
    }

    /// Resolve `REQUESTS_PER_MINUTE` (and optional config files) and build
    /// the limiter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the setting is present but not a
    /// positive integer.
    #[instrument]
    pub fn from_env() -> TollgateResult<Self> {
        let config = RateLimitConfig::load()?;
        Ok(Self::new(&config))
    }

    /// Configured capacity, `None` when unlimited.
    pub fn capacity(&self) -> Option<NonZeroU32> {
        self.inner.capacity
    }

    /// Whether a capacity is enforced.
    pub fn is_limited(&self) -> bool {
        self.inner.capacity.is_some()
    }

    /// Admissions currently tracked (may include entries not yet pruned).
    pub fn window_len(&self) -> usize {
        self.inner.window.lock().len()
    }

    /// Make one admission attempt without waiting.
    ///
    /// Returns `true` if the caller was admitted.
    pub fn try_acquire(&self) -> bool {
        let Some(capacity) = self.inner.capacity else {
            return true;
        };
        let now = self.inner.clock.now();
        self.inner.window.lock().try_admit(now, capacity)
    }

    /// Wait, suspending the current task, until a request may be made.
    ///
    /// Returns immediately without suspending when unlimited. Otherwise each
    /// round prunes and attempts admission under the window lock; a caller
    /// that is not admitted sleeps until the oldest entry expires (plus
    /// [`RETRY_BUFFER`]) and then starts over.
    ///
    /// Dropping the returned future before it completes is safe: no lock is
    /// held across a suspension point.
    pub async fn acquire(&self) {
        let Some(capacity) = self.inner.capacity else {
            return;
        };

        loop {
            let wait = {
                let mut window = self.inner.window.lock();
                let now = self.inner.clock.now();
                if window.try_admit(now, capacity) {
                    return;
                }
                window.next_wait(self.inner.clock.now())
            };

            match wait {
                Some(wait) => {
                    debug!(wait_ms = wait.as_millis() as u64, "Rate limit hit, waiting");
                    tokio::time::sleep(wait + RETRY_BUFFER).await;
                }
                // Stale hint: re-prune on the next round.
                None => tokio::task::yield_now().await,
            }
        }
    }

    /// Wait, blocking the current thread, until a request may be made.
    ///
    /// Same admission logic as [`acquire`](Self::acquire). When the computed
    /// wait is not positive the oldest entry is evicted outright and
    /// admission retried at once, instead of re-pruning on another round.
    ///
    /// Do not call this from inside an async task; use `acquire` there.
    pub fn acquire_blocking(&self) {
        let Some(capacity) = self.inner.capacity else {
            return;
        };

        loop {
            let wait = {
                let mut window = self.inner.window.lock();
                let now = self.inner.clock.now();
                if window.try_admit(now, capacity) {
                    return;
                }
                // Time has moved since admission was checked.
                match window.next_wait(self.inner.clock.now()) {
                    Some(wait) => wait,
                    None => {
                        let evicted = window.evict_oldest();
                        debug!(evicted = ?evicted, "Oldest admission expired, evicting");
                        continue;
                    }
                }
            };

            debug!(wait_ms = wait.as_millis() as u64, "Rate limit hit, blocking");
            self.inner.clock.block_for(wait + RETRY_BUFFER);
        }
    }

    /// [`acquire`](Self::acquire) bounded by a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitErrorKind::Timeout`] if admission did not happen
    /// within `limit`. A timed-out caller leaves no entry in the window.
    pub async fn acquire_timeout(&self, limit: Duration) -> Result<(), RateLimitError> {
        tokio::time::timeout(limit, self.acquire())
            .await
            .map_err(|_| RateLimitError::new(RateLimitErrorKind::Timeout(limit)))
    }

    /// Execute an operation with rate limiting and automatic retry.
    ///
    /// Every attempt first acquires admission, then runs `operation`. Transient
    /// failures (per [`RetryableError`]) are retried with exponential backoff:
    /// - Initial backoff: 2 seconds
    /// - Backoff multiplier: 2x per attempt (2s, 4s, 8s, 16s, 32s)
    /// - Maximum backoff: 60 seconds
    /// - Jitter: random variation to prevent thundering herd
    /// - Maximum retries: 5
    ///
    /// Permanent failures are returned immediately.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = limiter.execute(|| async {
    ///     client.generate(&request).await
    /// }).await?;
    /// ```
    pub async fn execute<F, Fut, R, E>(&self, operation: F) -> Result<R, E>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
        E: RetryableError + fmt::Display,
    {
        use tokio_retry2::strategy::{ExponentialBackoff, jitter};
        use tokio_retry2::{Retry, RetryError};

        let retry_strategy = ExponentialBackoff::from_millis(2)
            .factor(1000)
            .max_delay(Duration::from_secs(60))
            .map(jitter)
            .take(5);

        Retry::spawn(retry_strategy, || async {
            self.acquire().await;

            match operation().await {
                Ok(value) => Ok(value),
                Err(e) => {
                    if e.is_retryable() {
                        warn!("Transient error, will retry: {}", e);
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    } else {
                        warn!("Permanent error, failing immediately: {}", e);
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await
    }
}
