//! Tests for the shared rate limiter.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant as StdInstant};
use tokio::time::Instant;
use tollgate_error::{ModelsError, ModelsErrorKind, RateLimitErrorKind};
use tollgate_rate_limit::{Clock, ManualClock, RETRY_BUFFER, RateLimitConfig, RateLimiter};

fn limited(rpm: u32) -> RateLimiter {
    RateLimiter::new(&RateLimitConfig::per_minute(NonZeroU32::new(rpm).unwrap()))
}

fn limited_manual(rpm: u32) -> (RateLimiter, ManualClock) {
    let clock = ManualClock::new();
    let limiter = RateLimiter::with_clock(
        &RateLimitConfig::per_minute(NonZeroU32::new(rpm).unwrap()),
        Arc::new(clock.clone()),
    );
    (limiter, clock)
}

#[tokio::test(start_paused = true)]
async fn test_burst_within_capacity_does_not_wait() {
    let limiter = limited(5);
    let start = Instant::now();

    for _ in 0..5 {
        limiter.acquire().await;
    }

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(limiter.window_len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_unlimited_admits_any_burst_without_tracking() {
    let limiter = RateLimiter::unlimited();
    let start = Instant::now();

    for _ in 0..10_000 {
        limiter.acquire().await;
        assert!(limiter.try_acquire());
    }

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(limiter.window_len(), 0);
    assert!(limiter.capacity().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_async_over_capacity_waits_for_oldest_to_expire() {
    let limiter = limited(2);
    let start = Instant::now();

    limiter.acquire().await;
    limiter.acquire().await;
    assert_eq!(start.elapsed(), Duration::ZERO);

    limiter.acquire().await;
    let waited = start.elapsed();
    assert!(waited >= Duration::from_secs(60), "waited {waited:?}");
    assert!(waited < Duration::from_secs(61), "waited {waited:?}");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_tasks_never_over_admit() {
    let limiter = limited(2);
    let start = Instant::now();
    let mut handles = Vec::new();

    for _ in 0..6 {
        let limiter = limiter.clone();
        handles.push(tokio::spawn(async move {
            limiter.acquire().await;
            Instant::now()
        }));
    }

    let mut admitted = Vec::new();
    for handle in handles {
        admitted.push(handle.await.unwrap());
    }
    admitted.sort();

    for (i, first) in admitted.iter().enumerate() {
        let in_window = admitted[i..]
            .iter()
            .take_while(|t| t.duration_since(*first) < Duration::from_secs(60))
            .count();
        assert!(in_window <= 2, "{in_window} admissions inside one minute");
    }
    assert!(start.elapsed() >= Duration::from_secs(120));
}

#[test]
fn test_blocking_third_call_waits_sixty_seconds_plus_buffer() {
    let (limiter, clock) = limited_manual(2);
    let start = tollgate_rate_limit::Clock::now(&clock);

    limiter.acquire_blocking();
    limiter.acquire_blocking();
    assert_eq!(tollgate_rate_limit::Clock::now(&clock), start);

    limiter.acquire_blocking();
    let elapsed = tollgate_rate_limit::Clock::now(&clock) - start;
    assert_eq!(elapsed, Duration::from_secs(60) + RETRY_BUFFER);
}

#[test]
fn test_blocking_expired_entry_is_pruned_without_waiting() {
    let (limiter, clock) = limited_manual(1);
    let start = tollgate_rate_limit::Clock::now(&clock);

    limiter.acquire_blocking();
    clock.advance(Duration::from_secs(90));
    limiter.acquire_blocking();

    let elapsed = tollgate_rate_limit::Clock::now(&clock) - start;
    assert_eq!(elapsed, Duration::from_secs(90));
    assert_eq!(limiter.window_len(), 1);
}

/// Clock that moves forward by `step` on every read and records blocking sleeps.
#[derive(Debug, Clone)]
struct SteppingClock {
    state: Arc<Mutex<(StdInstant, Duration)>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl SteppingClock {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new((StdInstant::now(), Duration::ZERO))),
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn jump_to(&self, at: StdInstant, step: Duration) {
        *self.state.lock().unwrap() = (at, step);
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> StdInstant {
        let mut state = self.state.lock().unwrap();
        let current = state.0;
        let step = state.1;
        state.0 += step;
        current
    }

    fn block_for(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.state.lock().unwrap().0 += duration;
    }
}

#[test]
fn test_blocking_evicts_entry_that_expires_during_the_check() {
    let clock = SteppingClock::new();
    let limiter = RateLimiter::with_clock(
        &RateLimitConfig::per_minute(NonZeroU32::new(1).unwrap()),
        Arc::new(clock.clone()),
    );

    let t0 = clock.now();
    limiter.acquire_blocking();
    assert_eq!(limiter.window_len(), 1);

    // Admission is checked 1ms before the entry expires; the wait is
    // computed 1ms after, so the hint is already stale.
    clock.jump_to(
        t0 + Duration::from_secs(60) - Duration::from_millis(1),
        Duration::from_millis(2),
    );
    limiter.acquire_blocking();

    assert!(clock.sleeps.lock().unwrap().is_empty());
    assert_eq!(limiter.window_len(), 1);
}

#[test]
fn test_try_acquire_is_atomic_across_threads() {
    let limiter = limited(5);
    let admitted = Arc::new(AtomicUsize::new(0));

    let threads: Vec<_> = (0..16)
        .map(|_| {
            let limiter = limiter.clone();
            let admitted = Arc::clone(&admitted);
            std::thread::spawn(move || {
                if limiter.try_acquire() {
                    admitted.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(admitted.load(Ordering::SeqCst), 5);
    assert_eq!(limiter.window_len(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sync_and_async_callers_share_one_window() {
    let limiter = limited(2);

    let blocking = limiter.clone();
    tokio::task::spawn_blocking(move || blocking.acquire_blocking())
        .await
        .unwrap();
    limiter.acquire().await;

    assert_eq!(limiter.window_len(), 2);
    assert!(!limiter.try_acquire());
}

#[tokio::test(start_paused = true)]
async fn test_acquire_timeout_expires() {
    let limiter = limited(1);
    limiter.acquire().await;

    let err = limiter
        .acquire_timeout(Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &RateLimitErrorKind::Timeout(Duration::from_secs(5)));
    assert_eq!(limiter.window_len(), 1);

    limiter
        .acquire_timeout(Duration::from_secs(120))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_execute_retries_transient_errors() {
    let limiter = limited(10);
    let attempts = AtomicUsize::new(0);
    let counter = &attempts;

    let result = limiter
        .execute(move || async move {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Err(ModelsError::new(ModelsErrorKind::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                }))
            } else {
                Ok("done")
            }
        })
        .await;

    assert_eq!(result.unwrap(), "done");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(limiter.window_len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_execute_fails_fast_on_permanent_errors() {
    let limiter = limited(10);
    let attempts = AtomicUsize::new(0);
    let counter = &attempts;

    let result: Result<(), ModelsError> = limiter
        .execute(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ModelsError::new(ModelsErrorKind::Api {
                status: 401,
                message: "bad key".to_string(),
            }))
        })
        .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
