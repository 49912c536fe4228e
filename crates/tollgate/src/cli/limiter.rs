//! Rate limiter status handler.

use tollgate::{QUOTA_WINDOW, REQUESTS_PER_MINUTE_VAR, RateLimiter, TollgateResult};

/// Print how the shared limiter was configured.
pub fn show_limiter(limiter: &RateLimiter) -> TollgateResult<()> {
    match limiter.capacity() {
        Some(capacity) => println!(
            "{} admissions per {}s rolling window",
            capacity,
            QUOTA_WINDOW.as_secs()
        ),
        None => println!("unlimited ({} not set)", REQUESTS_PER_MINUTE_VAR),
    }
    Ok(())
}
