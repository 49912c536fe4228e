//! Provider identifiers and their static metadata.

use serde::{Deserialize, Serialize};

/// Supported chat model providers.
///
/// Identifiers are the lowercase provider ids used in configuration
/// (`openai`, `azure_openai`, `deepseek`, ...).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tollgate_models::ProviderKind;
///
/// let kind = ProviderKind::from_str("azure_openai").unwrap();
/// assert_eq!(kind, ProviderKind::AzureOpenAI);
/// assert_eq!(kind.api_key_var(), Some("AZURE_OPENAI_API_KEY"));
/// assert_eq!(kind.to_string(), "azure_openai");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI
    OpenAI,
    /// Azure-hosted OpenAI deployments
    #[strum(serialize = "azure_openai")]
    #[serde(rename = "azure_openai")]
    AzureOpenAI,
    /// Anthropic
    Anthropic,
    /// DeepSeek
    DeepSeek,
    /// Google Gemini
    Google,
    /// Mistral AI
    Mistral,
    /// Local Ollama server
    Ollama,
    /// Alibaba DashScope
    Alibaba,
    /// Moonshot AI
    MoonShot,
    /// Unbound AI gateway
    Unbound,
    /// OpenRouter
    OpenRouter,
}

/// Wire format a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Dialect {
    /// `POST {base}/chat/completions` with a bearer token
    OpenAICompatible,
    /// `POST {endpoint}/openai/deployments/{model}/chat/completions` with an `api-key` header
    AzureOpenAI,
    /// `POST {base}/v1/messages`
    Anthropic,
    /// `POST {base}/models/{model}:generateContent`
    Google,
    /// `POST {base}/api/chat`
    Ollama,
}

impl ProviderKind {
    /// Every provider, in declaration order.
    pub fn all() -> impl Iterator<Item = ProviderKind> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Provider id as a static string.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::AzureOpenAI => "Azure OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::DeepSeek => "DeepSeek",
            ProviderKind::Google => "Google",
            ProviderKind::Mistral => "Mistral",
            ProviderKind::Ollama => "Ollama",
            ProviderKind::Alibaba => "Alibaba",
            ProviderKind::MoonShot => "MoonShot",
            ProviderKind::Unbound => "Unbound AI",
            ProviderKind::OpenRouter => "OpenRouter",
        }
    }

    /// Environment variable holding the API key, `None` for keyless providers.
    pub fn api_key_var(self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAI => Some("OPENAI_API_KEY"),
            ProviderKind::AzureOpenAI => Some("AZURE_OPENAI_API_KEY"),
            ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
            ProviderKind::DeepSeek => Some("DEEPSEEK_API_KEY"),
            ProviderKind::Google => Some("GOOGLE_API_KEY"),
            ProviderKind::Mistral => Some("MISTRAL_API_KEY"),
            ProviderKind::Ollama => None,
            ProviderKind::Alibaba => Some("ALIBABA_API_KEY"),
            ProviderKind::MoonShot => Some("MOONSHOT_API_KEY"),
            ProviderKind::Unbound => Some("UNBOUND_API_KEY"),
            ProviderKind::OpenRouter => Some("OPENROUTER_API_KEY"),
        }
    }

    /// Environment variable overriding the base URL.
    pub fn endpoint_var(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_ENDPOINT",
            ProviderKind::AzureOpenAI => "AZURE_OPENAI_ENDPOINT",
            ProviderKind::Anthropic => "ANTHROPIC_ENDPOINT",
            ProviderKind::DeepSeek => "DEEPSEEK_ENDPOINT",
            ProviderKind::Google => "GOOGLE_ENDPOINT",
            ProviderKind::Mistral => "MISTRAL_ENDPOINT",
            ProviderKind::Ollama => "OLLAMA_ENDPOINT",
            ProviderKind::Alibaba => "ALIBABA_ENDPOINT",
            ProviderKind::MoonShot => "MOONSHOT_ENDPOINT",
            ProviderKind::Unbound => "UNBOUND_ENDPOINT",
            ProviderKind::OpenRouter => "OPENROUTER_ENDPOINT",
        }
    }

    /// Base URL used when neither the options nor the environment set one.
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAI => Some("https://api.openai.com/v1"),
            ProviderKind::AzureOpenAI => None,
            ProviderKind::Anthropic => Some("https://api.anthropic.com"),
            ProviderKind::DeepSeek => Some("https://api.deepseek.com"),
            ProviderKind::Google => Some("https://generativelanguage.googleapis.com/v1beta"),
            ProviderKind::Mistral => Some("https://api.mistral.ai/v1"),
            ProviderKind::Ollama => Some("http://localhost:11434"),
            ProviderKind::Alibaba => Some("https://dashscope.aliyuncs.com/compatible-mode/v1"),
            ProviderKind::MoonShot => Some("https://api.moonshot.cn/v1"),
            ProviderKind::Unbound => Some("https://api.getunbound.ai"),
            ProviderKind::OpenRouter => Some("https://openrouter.ai/api/v1"),
        }
    }

    /// Model used when the options name none.
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::OpenAI | ProviderKind::AzureOpenAI => "gpt-4o",
            ProviderKind::Anthropic => "claude-3-5-sonnet-20241022",
            ProviderKind::DeepSeek => "deepseek-chat",
            ProviderKind::Google => "gemini-2.0-flash-exp",
            ProviderKind::Mistral => "mistral-large-latest",
            ProviderKind::Ollama => "qwen2.5:7b",
            ProviderKind::Alibaba => "qwen-plus",
            ProviderKind::MoonShot => "moonshot-v1-32k-vision-preview",
            ProviderKind::Unbound => "gpt-4o-mini",
            ProviderKind::OpenRouter => "anthropic/claude-3.7-sonnet",
        }
    }

    /// Wire format used to talk to this provider.
    pub fn dialect(self) -> Dialect {
        match self {
            ProviderKind::AzureOpenAI => Dialect::AzureOpenAI,
            ProviderKind::Anthropic => Dialect::Anthropic,
            ProviderKind::Google => Dialect::Google,
            ProviderKind::Ollama => Dialect::Ollama,
            ProviderKind::OpenAI
            | ProviderKind::DeepSeek
            | ProviderKind::Mistral
            | ProviderKind::Alibaba
            | ProviderKind::MoonShot
            | ProviderKind::Unbound
            | ProviderKind::OpenRouter => Dialect::OpenAICompatible,
        }
    }
}
