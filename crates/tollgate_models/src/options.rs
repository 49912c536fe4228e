//! Caller-supplied provider options and environment access.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Option bag passed when resolving a provider.
///
/// Every field is optional. Empty strings count as absent, so a blank UI
/// field falls through to the environment exactly like an unset one.
///
/// # Examples
///
/// ```
/// use tollgate_models::ProviderOptions;
///
/// let options = ProviderOptions::default()
///     .with_model_name("gpt-4o-mini")
///     .with_temperature(0.7);
/// assert_eq!(options.model_name().as_deref(), Some("gpt-4o-mini"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ProviderOptions {
    /// Explicit API key
    #[serde(default)]
    api_key: Option<String>,
    /// Explicit base URL (endpoint for Azure)
    #[serde(default)]
    base_url: Option<String>,
    /// Model identifier
    #[serde(default)]
    model_name: Option<String>,
    /// Sampling temperature
    #[serde(default)]
    temperature: Option<f32>,
    /// Ollama context window
    #[serde(default)]
    num_ctx: Option<u32>,
    /// Ollama generation limit
    #[serde(default)]
    num_predict: Option<u32>,
    /// Azure OpenAI API version
    #[serde(default)]
    api_version: Option<String>,
}

/// Source of environment variables.
pub trait EnvLookup: Send + Sync {
    /// Value of `name`, `None` when unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, treating an empty value as unset.
    fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// `Some(s)` only for non-empty strings.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
