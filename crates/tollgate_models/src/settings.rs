//! Resolution of provider options into concrete client settings.

use crate::options::present;
use crate::{Dialect, EnvLookup, ProviderKind, ProviderOptions};
use derive_getters::Getters;
use std::fmt;
use tollgate_error::{ProviderError, ProviderErrorKind};
use tracing::{debug, instrument};

/// Temperature used when none is given.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
/// Ollama context window used when none is given.
pub const DEFAULT_NUM_CTX: u32 = 32_000;
/// Ollama generation limit used when none is given.
pub const DEFAULT_NUM_PREDICT: u32 = 1024;
/// Azure OpenAI API version used when none is given.
pub const DEFAULT_AZURE_API_VERSION: &str = "2025-01-01-preview";
/// OpenRouter `HTTP-Referer` used when `OPENROUTER_REFERER` is unset.
pub const DEFAULT_OPENROUTER_REFERER: &str = "https://github.com/browser-use/mcp-browser-use";
/// OpenRouter `X-Title` used when `OPENROUTER_X_TITLE` is unset.
pub const DEFAULT_OPENROUTER_TITLE: &str = "MCP Browser Use";

/// How a model's chain-of-thought is exposed, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reasoning {
    /// Plain answer only
    #[default]
    None,
    /// Separate `reasoning_content` field in the completion (DeepSeek R1)
    ReasoningContent,
    /// `<think>...</think>` block at the head of the answer (DeepSeek R1 on Ollama)
    ThinkTags,
}

/// Fully resolved settings for one chat model client.
#[derive(Clone, PartialEq, Getters)]
pub struct ChatModelSettings {
    provider: ProviderKind,
    model: String,
    base_url: String,
    api_key: Option<String>,
    temperature: f32,
    reasoning: Reasoning,
    headers: Vec<(String, String)>,
    num_ctx: Option<u32>,
    num_predict: Option<u32>,
    api_version: Option<String>,
}

impl fmt::Debug for ChatModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatModelSettings")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("temperature", &self.temperature)
            .field("reasoning", &self.reasoning)
            .field("headers", &self.headers)
            .field("num_ctx", &self.num_ctx)
            .field("num_predict", &self.num_predict)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ChatModelSettings {
    /// Apply the resolution rules for `provider`.
    ///
    /// Explicit options win over environment variables, which win over
    /// built-in defaults.
    ///
    /// # Errors
    ///
    /// - [`ProviderErrorKind::MissingApiKey`] when a keyed provider has no key
    /// - [`ProviderErrorKind::MissingEndpoint`] when Azure has no endpoint
    #[instrument(skip(options, env), fields(provider = %provider))]
    pub fn resolve(
        provider: ProviderKind,
        options: &ProviderOptions,
        env: &dyn EnvLookup,
    ) -> Result<Self, ProviderError> {
        let api_key = match provider.api_key_var() {
            Some(env_var) => Some(
                present(options.api_key())
                    .map(str::to_string)
                    .or_else(|| env.non_empty(env_var))
                    .ok_or_else(|| {
                        ProviderError::new(ProviderErrorKind::MissingApiKey {
                            provider: provider.display_name().to_string(),
                            env_var: env_var.to_string(),
                        })
                    })?,
            ),
            None => None,
        };

        let base_url = present(options.base_url())
            .map(str::to_string)
            .or_else(|| env.non_empty(provider.endpoint_var()))
            .or_else(|| provider.default_base_url().map(str::to_string))
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::MissingEndpoint {
                    provider: provider.display_name().to_string(),
                    env_var: provider.endpoint_var().to_string(),
                })
            })?;

        let model = present(options.model_name())
            .unwrap_or(provider.default_model())
            .to_string();

        let reasoning = match provider {
            ProviderKind::DeepSeek if model == "deepseek-reasoner" => Reasoning::ReasoningContent,
            ProviderKind::Ollama if model.contains("deepseek-r1") => Reasoning::ThinkTags,
            _ => Reasoning::None,
        };

        let (num_ctx, num_predict) = match provider {
            ProviderKind::Ollama => {
                let num_predict = match reasoning {
                    // R1 runs unbounded unless asked otherwise
                    Reasoning::ThinkTags => *options.num_predict(),
                    _ => Some(options.num_predict().unwrap_or(DEFAULT_NUM_PREDICT)),
                };
                (Some(options.num_ctx().unwrap_or(DEFAULT_NUM_CTX)), num_predict)
            }
            _ => (None, None),
        };

        let api_version = match provider {
            ProviderKind::AzureOpenAI => Some(
                present(options.api_version())
                    .map(str::to_string)
                    .or_else(|| env.non_empty("AZURE_OPENAI_API_VERSION"))
                    .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
            ),
            _ => None,
        };

        let headers = match provider {
            ProviderKind::OpenRouter => vec![
                (
                    "HTTP-Referer".to_string(),
                    env.non_empty("OPENROUTER_REFERER")
                        .unwrap_or_else(|| DEFAULT_OPENROUTER_REFERER.to_string()),
                ),
                (
                    "X-Title".to_string(),
                    env.non_empty("OPENROUTER_X_TITLE")
                        .unwrap_or_else(|| DEFAULT_OPENROUTER_TITLE.to_string()),
                ),
            ],
            _ => Vec::new(),
        };

        let settings = Self {
            provider,
            model,
            base_url,
            api_key,
            temperature: options.temperature().unwrap_or(DEFAULT_TEMPERATURE),
            reasoning,
            headers,
            num_ctx,
            num_predict,
            api_version,
        };
        debug!(?settings, "Resolved chat model settings");
        Ok(settings)
    }

    /// Wire format for this provider.
    pub fn dialect(&self) -> Dialect {
        self.provider.dialect()
    }

    /// Base URL without a trailing slash.
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = ChatModelSettings::resolve(
            ProviderKind::OpenAI,
            &ProviderOptions::default().with_api_key("sk-very-secret"),
            &env(&[]),
        )
        .unwrap();

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_base_trims_trailing_slash() {
        let settings = ChatModelSettings::resolve(
            ProviderKind::Ollama,
            &ProviderOptions::default().with_base_url("http://gpu-box:11434/"),
            &env(&[]),
        )
        .unwrap();
        assert_eq!(settings.base(), "http://gpu-box:11434");
    }
}
