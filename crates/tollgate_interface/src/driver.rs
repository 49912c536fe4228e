//! Chat backend trait.

use async_trait::async_trait;
use tollgate_core::{ChatRequest, ChatResponse};
use tollgate_error::TollgateResult;

/// Core trait that every chat model backend implements.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Generate a reply to the given conversation.
    async fn generate(&self, req: &ChatRequest) -> TollgateResult<ChatResponse>;

    /// Provider identifier (e.g., "anthropic", "openai", "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}
