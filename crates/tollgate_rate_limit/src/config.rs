//! Rate limiter configuration.
//!
//! The limiter has a single setting, `requests_per_minute`. It is resolved
//! once, at construction, from these sources (later sources override
//! earlier ones):
//! 1. `~/.config/tollgate/tollgate.toml` (optional)
//! 2. `./tollgate.toml` (optional)
//! 3. the `REQUESTS_PER_MINUTE` environment variable
//!
//! Absence everywhere means unlimited. A present value that is not a positive
//! integer is a fatal configuration error.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;
use tollgate_error::{ConfigError, TollgateResult};
use tracing::{debug, instrument};

/// Environment variable holding the per-minute capacity.
pub const REQUESTS_PER_MINUTE_VAR: &str = "REQUESTS_PER_MINUTE";

/// Settings as they appear in the configuration sources, before validation.
///
/// The value is kept as text so that `2.5` or `true` are rejected instead of
/// being coerced to an integer.
#[derive(Debug, Default, Deserialize)]
struct RawRateLimitSettings {
    #[serde(default)]
    requests_per_minute: Option<String>,
}

/// Resolved limiter configuration.
///
/// # Example
///
/// ```
/// use tollgate_rate_limit::RateLimitConfig;
///
/// let config = RateLimitConfig::parse(Some("30")).unwrap();
/// assert_eq!(config.requests_per_minute().map(|n| n.get()), Some(30));
///
/// assert!(RateLimitConfig::parse(None).unwrap().is_unlimited());
/// assert!(RateLimitConfig::parse(Some("0")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RateLimitConfig {
    requests_per_minute: Option<NonZeroU32>,
}

impl RateLimitConfig {
    /// No capacity enforced.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// At most `requests` admissions in any trailing minute.
    pub fn per_minute(requests: NonZeroU32) -> Self {
        Self {
            requests_per_minute: Some(requests),
        }
    }

    /// Configured capacity.
    pub fn requests_per_minute(&self) -> Option<NonZeroU32> {
        self.requests_per_minute
    }

    /// Whether no capacity is configured.
    pub fn is_unlimited(&self) -> bool {
        self.requests_per_minute.is_none()
    }

    /// Validate a raw setting.
    ///
    /// # Errors
    ///
    /// Returns an error unless `raw` is absent or a positive integer.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(Self::unlimited());
        };

        let value: u32 = raw.trim().parse().map_err(|e| {
            ConfigError::new(format!(
                "{} must be a positive integer, got {:?}: {}",
                REQUESTS_PER_MINUTE_VAR, raw, e
            ))
        })?;

        let requests = NonZeroU32::new(value).ok_or_else(|| {
            ConfigError::new(format!(
                "{} must be a positive integer, got 0",
                REQUESTS_PER_MINUTE_VAR
            ))
        })?;

        Ok(Self::per_minute(requests))
    }

    /// Load from the optional config files and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed or the resolved value
    /// is not a positive integer.
    #[instrument]
    pub fn load() -> TollgateResult<Self> {
        debug!("Loading rate limit configuration: environment > current dir > home dir");

        let mut builder = Config::builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tollgate/tollgate.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("tollgate").required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the value is
    /// invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TollgateResult<Self> {
        debug!("Loading rate limit configuration from file");
        Self::from_builder(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Resolve from an explicit set of environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REQUESTS_PER_MINUTE` is present but invalid.
    pub fn from_env_map(vars: &HashMap<String, String>) -> TollgateResult<Self> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self::from_builder(
            Config::builder().add_source(Environment::default().source(Some(source))),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> TollgateResult<Self> {
        let raw: RawRateLimitSettings = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        Ok(Self::parse(raw.requests_per_minute.as_deref())?)
    }
}
