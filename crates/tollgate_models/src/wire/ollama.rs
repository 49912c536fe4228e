//! Ollama `/api/chat` format.

use crate::{ChatModelSettings, Reasoning};
use serde::{Deserialize, Serialize};
use tollgate_core::{ChatRequest, ChatResponse, Usage};

#[derive(Debug, Serialize)]
pub(crate) struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_ctx: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OllamaChatResponse {
    #[serde(default)]
    model: Option<String>,
    message: OllamaResponseMessage,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    #[serde(default)]
    content: String,
}

pub(crate) fn to_request<'a>(
    settings: &'a ChatModelSettings,
    req: &'a ChatRequest,
) -> OllamaChatRequest<'a> {
    OllamaChatRequest {
        model: settings.model(),
        messages: req
            .messages
            .iter()
            .map(|m| OllamaMessage {
                role: m.role.as_str(),
                content: &m.content,
            })
            .collect(),
        stream: false,
        options: OllamaOptions {
            temperature: req.temperature.unwrap_or(*settings.temperature()),
            num_ctx: *settings.num_ctx(),
            num_predict: req.max_tokens.or(*settings.num_predict()),
        },
    }
}

pub(crate) fn from_response(
    settings: &ChatModelSettings,
    response: OllamaChatResponse,
) -> ChatResponse {
    let (reasoning, content) = match settings.reasoning() {
        Reasoning::ThinkTags => split_think(&response.message.content),
        _ => (None, response.message.content),
    };

    let usage = match (response.prompt_eval_count, response.eval_count) {
        (None, None) => None,
        (input, output) => Some(Usage {
            input_tokens: input.unwrap_or_default(),
            output_tokens: output.unwrap_or_default(),
        }),
    };

    ChatResponse {
        content,
        reasoning,
        model: response.model,
        usage,
    }
}

/// Separate a leading `<think>...</think>` block from the answer.
///
/// Text without a closing tag is returned unchanged as the answer.
pub(crate) fn split_think(raw: &str) -> (Option<String>, String) {
    const OPEN: &str = "<think>";
    const CLOSE: &str = "</think>";

    let Some(end) = raw.find(CLOSE) else {
        return (None, raw.to_string());
    };

    let head = &raw[..end];
    let thought = head
        .find(OPEN)
        .map_or(head, |start| &head[start + OPEN.len()..])
        .trim();
    let answer = raw[end + CLOSE.len()..].trim();

    let reasoning = (!thought.is_empty()).then(|| thought.to_string());
    (reasoning, answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_think_separates_reasoning() {
        let (reasoning, answer) = split_think("<think>\nThe user greets me.\n</think>\n\nHello!");
        assert_eq!(reasoning.as_deref(), Some("The user greets me."));
        assert_eq!(answer, "Hello!");
    }

    #[test]
    fn test_split_think_without_open_tag() {
        let (reasoning, answer) = split_think("pondering</think>Answer");
        assert_eq!(reasoning.as_deref(), Some("pondering"));
        assert_eq!(answer, "Answer");
    }

    #[test]
    fn test_split_think_passthrough_without_tags() {
        let (reasoning, answer) = split_think("Just an answer");
        assert!(reasoning.is_none());
        assert_eq!(answer, "Just an answer");
    }

    #[test]
    fn test_split_think_empty_thought() {
        let (reasoning, answer) = split_think("<think></think>42");
        assert!(reasoning.is_none());
        assert_eq!(answer, "42");
    }
}
