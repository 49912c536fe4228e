//! Time sources for the rate limiter.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of "now" plus the thread-blocking sleep used by
/// [`RateLimiter::acquire_blocking`](crate::RateLimiter::acquire_blocking).
///
/// The asynchronous path always suspends with `tokio::time::sleep`, so it
/// follows tokio's clock (pausable in tests) rather than this trait's
/// `block_for`.
pub trait Clock: Send + Sync + fmt::Debug + 'static {
    /// Current monotonic time.
    fn now(&self) -> Instant;

    /// Park the calling thread for `duration`.
    fn block_for(&self, duration: Duration);
}

/// Wall clock.
///
/// `now` reads tokio's clock, which is the OS monotonic clock except inside a
/// runtime whose time is paused.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn block_for(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Hand-driven clock. Blocking sleeps advance it instantly.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tollgate_rate_limit::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.block_for(Duration::from_secs(60));
/// assert_eq!(clock.now() - start, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Start at the current instant.
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }

    fn block_for(&self, duration: Duration) {
        self.advance(duration);
    }
}
