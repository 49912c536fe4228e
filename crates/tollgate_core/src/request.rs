//! Request and response types for chat generation.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Provider-neutral chat request.
///
/// Sampling fields left as `None` fall back to the values the chat model was
/// resolved with.
///
/// # Examples
///
/// ```
/// use tollgate_core::{ChatRequest, Message};
///
/// let request = ChatRequest::new(vec![Message::user("Hello!")]).with_max_tokens(100);
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature override
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a request from a conversation.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Shorthand for a single user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(vec![Message::user(text)])
    }

    /// Set the maximum number of generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Concatenated text of all system messages, if any.
    ///
    /// Providers that take the system prompt out of band (Anthropic, Google)
    /// use this together with [`ChatRequest::conversation`].
    pub fn system_prompt(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }

    /// The non-system messages, in order.
    pub fn conversation(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub input_tokens: u32,
    /// Tokens produced by the model
    pub output_tokens: u32,
}

/// Provider-neutral chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChatResponse {
    /// The answer text
    pub content: String,
    /// Chain-of-thought emitted by reasoning models, kept apart from the answer
    pub reasoning: Option<String>,
    /// Model that produced the answer, as reported by the provider
    pub model: Option<String>,
    /// Token usage, when reported
    pub usage: Option<Usage>,
}
