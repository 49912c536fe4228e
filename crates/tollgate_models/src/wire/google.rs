//! Gemini `generateContent` format.

use crate::ChatModelSettings;
use serde::{Deserialize, Serialize};
use tollgate_core::{ChatRequest, ChatResponse, Role, Usage};
use tollgate_error::{ModelsError, ModelsErrorKind, ModelsResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<OwnedTextPart>,
}

#[derive(Debug, Serialize)]
struct OwnedTextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

pub(crate) fn to_request<'a>(
    settings: &ChatModelSettings,
    req: &'a ChatRequest,
) -> ModelsResult<GenerateContentRequest<'a>> {
    let contents: Vec<Content<'a>> = req
        .conversation()
        .map(|m| Content {
            role: match m.role {
                Role::Assistant => "model",
                _ => "user",
            },
            parts: vec![TextPart { text: &m.content }],
        })
        .collect();

    if contents.is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::Conversion(
            "Gemini requires at least one user or model turn".to_string(),
        )));
    }

    Ok(GenerateContentRequest {
        contents,
        system_instruction: req.system_prompt().map(|text| SystemInstruction {
            parts: vec![OwnedTextPart { text }],
        }),
        generation_config: GenerationConfig {
            temperature: req.temperature.unwrap_or(*settings.temperature()),
            max_output_tokens: req.max_tokens,
        },
    })
}

pub(crate) fn from_response(response: GenerateContentResponse) -> ModelsResult<ChatResponse> {
    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        ModelsError::new(ModelsErrorKind::Parse(
            "Response contained no candidates".to_string(),
        ))
    })?;

    let mut content = String::new();
    let mut reasoning: Option<String> = None;
    for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
        let Some(text) = part.text else { continue };
        if part.thought {
            reasoning.get_or_insert_with(String::new).push_str(&text);
        } else {
            content.push_str(&text);
        }
    }

    Ok(ChatResponse {
        content,
        reasoning,
        model: response.model_version,
        usage: response.usage_metadata.map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        }),
    })
}
