//! Chat model providers for Tollgate.
//!
//! A provider id plus an optional [`ProviderOptions`] bag resolves to a
//! [`ChatModel`]: explicit options win, then `{PROVIDER}_API_KEY` and
//! `{PROVIDER}_ENDPOINT` style environment variables, then built-in defaults.
//! Every provider except Ollama requires an API key.
//!
//! # Supported Providers
//!
//! | id | wire format |
//! |----|-------------|
//! | `openai`, `deepseek`, `mistral`, `alibaba`, `moonshot`, `unbound`, `openrouter` | OpenAI chat completions |
//! | `azure_openai` | Azure OpenAI deployments |
//! | `anthropic` | Anthropic Messages |
//! | `google` | Gemini `generateContent` |
//! | `ollama` | Ollama `/api/chat` |
//!
//! # Example
//!
//! ```no_run
//! use tollgate_core::ChatRequest;
//! use tollgate_interface::ChatDriver;
//! use tollgate_models::{ProviderOptions, ProviderRegistry};
//! use tollgate_rate_limit::RateLimiter;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ProviderRegistry::with_defaults().with_limiter(RateLimiter::from_env()?);
//! let model = registry.resolve("openai", &ProviderOptions::default())?;
//! let response = model.generate(&ChatRequest::prompt("Hello")).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod client;
mod options;
mod provider;
mod registry;
mod settings;
mod wire;

pub use catalog::model_names;
pub use client::ChatModel;
pub use options::{EnvLookup, ProcessEnv, ProviderOptions};
pub use provider::{Dialect, ProviderKind};
pub use registry::{BuiltinFactory, ProviderFactory, ProviderRegistry};
pub use settings::{
    ChatModelSettings, DEFAULT_AZURE_API_VERSION, DEFAULT_NUM_CTX, DEFAULT_NUM_PREDICT,
    DEFAULT_OPENROUTER_REFERER, DEFAULT_OPENROUTER_TITLE, DEFAULT_TEMPERATURE, Reasoning,
};
