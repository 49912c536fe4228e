//! Anthropic Messages API format.

use crate::ChatModelSettings;
use serde::{Deserialize, Serialize};
use tollgate_core::{ChatRequest, ChatResponse, Role, Usage};
use tollgate_error::{ModelsError, ModelsErrorKind, ModelsResult};

pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    Thinking {
        thinking: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

pub(crate) fn to_request<'a>(
    settings: &'a ChatModelSettings,
    req: &'a ChatRequest,
) -> ModelsResult<MessagesRequest<'a>> {
    let messages: Vec<AnthropicMessage<'a>> = req
        .conversation()
        .map(|m| AnthropicMessage {
            role: match m.role {
                Role::Assistant => "assistant",
                _ => "user",
            },
            content: &m.content,
        })
        .collect();

    if messages.is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::Conversion(
            "Anthropic requires at least one user or assistant message".to_string(),
        )));
    }

    Ok(MessagesRequest {
        model: settings.model(),
        max_tokens: req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        system: req.system_prompt(),
        messages,
        temperature: req.temperature.unwrap_or(*settings.temperature()),
    })
}

pub(crate) fn from_response(response: MessagesResponse) -> ChatResponse {
    let mut content = String::new();
    let mut reasoning: Option<String> = None;

    for block in response.content {
        match block {
            ContentBlock::Text { text } => content.push_str(&text),
            ContentBlock::Thinking { thinking } => {
                reasoning.get_or_insert_with(String::new).push_str(&thinking)
            }
            ContentBlock::Other => {}
        }
    }

    ChatResponse {
        content,
        reasoning,
        model: response.model,
        usage: response.usage.map(|u| Usage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
        }),
    }
}
