//! OpenAI chat completions format, shared by every OpenAI-compatible provider
//! and by Azure OpenAI.

use crate::{ChatModelSettings, Reasoning};
use serde::{Deserialize, Serialize};
use tollgate_core::{ChatRequest, ChatResponse, Usage};
use tollgate_error::{ModelsError, ModelsErrorKind, ModelsResult};

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

pub(crate) fn to_request<'a>(
    settings: &'a ChatModelSettings,
    req: &'a ChatRequest,
) -> CompletionRequest<'a> {
    CompletionRequest {
        model: settings.model(),
        messages: req
            .messages
            .iter()
            .map(|m| CompletionMessage {
                role: m.role.as_str(),
                content: &m.content,
            })
            .collect(),
        temperature: req.temperature.unwrap_or(*settings.temperature()),
        max_tokens: req.max_tokens,
    }
}

pub(crate) fn from_response(
    settings: &ChatModelSettings,
    response: CompletionResponse,
) -> ModelsResult<ChatResponse> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        ModelsError::new(ModelsErrorKind::Parse(
            "Completion contained no choices".to_string(),
        ))
    })?;

    let reasoning = match settings.reasoning() {
        Reasoning::ReasoningContent => choice.message.reasoning_content,
        _ => None,
    };

    Ok(ChatResponse {
        content: choice.message.content.unwrap_or_default(),
        reasoning,
        model: response.model,
        usage: response.usage.map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        }),
    })
}
