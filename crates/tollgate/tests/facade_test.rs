//! Tests that the facade exposes a working end-to-end surface.

use std::collections::HashMap;
use std::num::NonZeroU32;
use tollgate::{
    ChatDriver, DEFAULT_EXTENSIONS, ProviderErrorKind, ProviderOptions, ProviderRegistry,
    RateLimitConfig, RateLimiter, latest_files,
};

#[test]
fn test_resolve_ollama_through_facade() {
    let registry = ProviderRegistry::with_defaults();
    let env: HashMap<String, String> = HashMap::new();

    let model = registry
        .resolve_with_env("ollama", &ProviderOptions::default(), &env)
        .expect("ollama needs no key");

    assert_eq!(model.provider_name(), "ollama");
    assert!(!model.model_name().is_empty());
}

#[test]
fn test_unknown_provider_through_facade() {
    let registry = ProviderRegistry::with_defaults();
    let env: HashMap<String, String> = HashMap::new();

    let err = registry
        .resolve_with_env("nonesuch", &ProviderOptions::default(), &env)
        .err()
        .expect("unknown provider must fail");

    assert!(matches!(
        err.kind,
        ProviderErrorKind::UnsupportedProvider(ref id) if id == "nonesuch"
    ));
}

#[test]
fn test_registry_shares_limiter_quota() {
    let limiter = RateLimiter::new(&RateLimitConfig::per_minute(NonZeroU32::new(2).unwrap()));
    let registry = ProviderRegistry::with_defaults().with_limiter(limiter.clone());
    let env: HashMap<String, String> = HashMap::new();

    let _first = registry
        .resolve_with_env("ollama", &ProviderOptions::default(), &env)
        .expect("resolve");
    let _second = registry
        .resolve_with_env("ollama", &ProviderOptions::default(), &env)
        .expect("resolve");

    // Resolution itself never consumes quota
    assert_eq!(limiter.window_len(), 0);

    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());
    assert_eq!(limiter.window_len(), 2);
}

#[test]
fn test_latest_files_defaults_through_facade() {
    let dir = tempfile::tempdir().expect("tempdir");
    let recordings = dir.path().join("recordings");

    let latest = latest_files(&recordings, &[]);

    assert!(recordings.is_dir());
    assert_eq!(latest.len(), DEFAULT_EXTENSIONS.len());
    assert!(latest.values().all(Option::is_none));
}
