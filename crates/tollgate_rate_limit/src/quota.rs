//! Rolling window of admitted requests.

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Length of the trailing window a capacity applies to.
pub const QUOTA_WINDOW: Duration = Duration::from_secs(60);

/// Admission timestamps inside the trailing [`QUOTA_WINDOW`], oldest first.
///
/// Pure bookkeeping: no locking, no sleeping. Expired entries are purged
/// lazily by [`prune`](Self::prune), which [`try_admit`](Self::try_admit)
/// calls before every check.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use std::time::{Duration, Instant};
/// use tollgate_rate_limit::QuotaWindow;
///
/// let capacity = NonZeroU32::new(1).unwrap();
/// let mut window = QuotaWindow::new();
/// let t0 = Instant::now();
///
/// assert!(window.try_admit(t0, capacity));
/// assert!(!window.try_admit(t0, capacity));
/// assert_eq!(window.next_wait(t0), Some(Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaWindow {
    admitted: VecDeque<Instant>,
}

impl QuotaWindow {
    /// Empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry with `now - entry >= 60s`.
    pub fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.admitted.front() {
            if now.saturating_duration_since(oldest) >= QUOTA_WINDOW {
                self.admitted.pop_front();
            } else {
                break;
            }
        }
    }

    /// Prune, then record `now` if fewer than `capacity` entries remain.
    ///
    /// Returns whether the request was admitted.
    #[must_use]
    pub fn try_admit(&mut self, now: Instant, capacity: NonZeroU32) -> bool {
        self.prune(now);
        if self.admitted.len() < capacity.get() as usize {
            self.admitted.push_back(now);
            true
        } else {
            false
        }
    }

    /// Time until the oldest entry leaves the window.
    ///
    /// `None` when the window is empty or the oldest entry has already
    /// expired; the caller should re-check admission instead of sleeping.
    pub fn next_wait(&self, now: Instant) -> Option<Duration> {
        let oldest = *self.admitted.front()?;
        (oldest + QUOTA_WINDOW)
            .checked_duration_since(now)
            .filter(|wait| !wait.is_zero())
    }

    /// Remove the oldest entry regardless of its age.
    pub fn evict_oldest(&mut self) -> Option<Instant> {
        self.admitted.pop_front()
    }

    /// Oldest admission still tracked.
    pub fn oldest(&self) -> Option<Instant> {
        self.admitted.front().copied()
    }

    /// Number of tracked admissions.
    pub fn len(&self) -> usize {
        self.admitted.len()
    }

    /// Whether no admissions are tracked.
    pub fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }
}
