//! Known model names per provider.
//!
//! Informational only: resolution accepts any model name.

use crate::ProviderKind;

/// Commonly used model names for `kind`.
pub fn model_names(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::Anthropic => &[
            "claude-3-5-sonnet-20241022",
            "claude-3-5-sonnet-20240620",
            "claude-3-opus-20240229",
        ],
        ProviderKind::OpenAI => &["gpt-4o", "gpt-4", "gpt-3.5-turbo", "o3-mini"],
        ProviderKind::DeepSeek => &["deepseek-chat", "deepseek-reasoner"],
        ProviderKind::Google => &[
            "gemini-2.0-flash",
            "gemini-2.0-flash-thinking-exp",
            "gemini-1.5-flash-latest",
            "gemini-1.5-flash-8b-latest",
            "gemini-2.0-flash-thinking-exp-01-21",
            "gemini-2.0-pro-exp-02-05",
        ],
        ProviderKind::Ollama => &[
            "qwen2.5:7b",
            "qwen2.5:14b",
            "qwen2.5:32b",
            "qwen2.5-coder:14b",
            "qwen2.5-coder:32b",
            "llama2:7b",
            "deepseek-r1:14b",
            "deepseek-r1:32b",
        ],
        ProviderKind::AzureOpenAI => &["gpt-4o", "gpt-4", "gpt-3.5-turbo"],
        ProviderKind::Mistral => &[
            "pixtral-large-latest",
            "mistral-large-latest",
            "mistral-small-latest",
            "ministral-8b-latest",
        ],
        ProviderKind::Alibaba => &["qwen-plus", "qwen-max", "qwen-turbo", "qwen-long"],
        ProviderKind::MoonShot => &[
            "moonshot-v1-32k-vision-preview",
            "moonshot-v1-8k-vision-preview",
        ],
        ProviderKind::Unbound => &["gemini-2.0-flash", "gpt-4o-mini", "gpt-4o", "gpt-4.5-preview"],
        ProviderKind::OpenRouter => &[
            "google/gemini-2.5-pro-exp-03-25:free",
            "openai/gpt-3.5-turbo",
            "openai/gpt-4o",
            "mistralai/mistral-large",
            "meta-llama/llama-3-70b-instruct",
        ],
    }
}
