//! Tests for rate limit configuration resolution.

use std::collections::HashMap;
use std::io::Write;
use tempfile::Builder;
use tollgate_rate_limit::{RateLimitConfig, RateLimiter};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_absent_setting_is_unlimited() {
    let config = RateLimitConfig::from_env_map(&env(&[("PATH", "/usr/bin")])).unwrap();
    assert!(config.is_unlimited());
    assert!(!RateLimiter::new(&config).is_limited());
}

#[test]
fn test_env_setting_parsed() {
    let config = RateLimitConfig::from_env_map(&env(&[("REQUESTS_PER_MINUTE", "12")])).unwrap();
    assert_eq!(config.requests_per_minute().map(|n| n.get()), Some(12));
}

#[test]
fn test_surrounding_whitespace_tolerated() {
    let config = RateLimitConfig::parse(Some(" 7 ")).unwrap();
    assert_eq!(config.requests_per_minute().map(|n| n.get()), Some(7));
}

#[test]
fn test_malformed_values_are_fatal() {
    for bad in ["0", "-3", "2.5", "ten", "", "true"] {
        let result = RateLimitConfig::from_env_map(&env(&[("REQUESTS_PER_MINUTE", bad)]));
        assert!(result.is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_error_names_the_setting() {
    let err = RateLimitConfig::parse(Some("lots")).unwrap_err();
    assert!(err.message.contains("REQUESTS_PER_MINUTE"));
}

#[test]
fn test_config_from_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "requests_per_minute = 42").unwrap();

    let config = RateLimitConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.requests_per_minute().map(|n| n.get()), Some(42));
}

#[test]
fn test_config_file_without_setting_is_unlimited() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "# nothing here").unwrap();

    let config = RateLimitConfig::from_file(temp_file.path()).unwrap();
    assert!(config.is_unlimited());
}
