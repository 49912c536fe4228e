//! Wire-level tests for chat model clients against a mock server.

use serde_json::json;
use std::collections::HashMap;
use tollgate_core::{ChatRequest, Message};
use tollgate_interface::ChatDriver;
use tollgate_models::{ChatModel, ProviderKind, ProviderOptions};
use tollgate_rate_limit::RateLimiter;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn model(kind: ProviderKind, server: &MockServer, options: ProviderOptions) -> ChatModel {
    let env: HashMap<String, String> = HashMap::new();
    let options = options.with_base_url(server.uri());
    ChatModel::resolve(kind, &options, &env, RateLimiter::unlimited()).unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "role": "assistant", "content": content } }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 3 }
    })
}

fn conversation() -> ChatRequest {
    ChatRequest::new(vec![
        Message::system("Be brief."),
        Message::user("Say hi"),
    ])
}

#[tokio::test]
async fn test_openai_chat_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 0.0,
            "messages": [
                { "role": "system", "content": "Be brief." },
                { "role": "user", "content": "Say hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::OpenAI,
        &server,
        ProviderOptions::default().with_api_key("sk-test"),
    );
    let response = client.generate(&conversation()).await.unwrap();

    assert_eq!(response.content, "Hi!");
    assert!(response.reasoning.is_none());
    let usage = response.usage.unwrap();
    assert_eq!(usage.input_tokens, 12);
    assert_eq!(usage.output_tokens, 3);
}

#[tokio::test]
async fn test_deepseek_reasoner_separates_reasoning_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "4",
                    "reasoning_content": "2 + 2 is 4."
                }
            }]
        })))
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::DeepSeek,
        &server,
        ProviderOptions::default()
            .with_api_key("ds")
            .with_model_name("deepseek-reasoner"),
    );
    let response = client.generate(&ChatRequest::prompt("2+2?")).await.unwrap();

    assert_eq!(response.content, "4");
    assert_eq!(response.reasoning.as_deref(), Some("2 + 2 is 4."));
}

#[tokio::test]
async fn test_openrouter_sends_attribution_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("HTTP-Referer", "https://github.com/browser-use/mcp-browser-use"))
        .and(header("X-Title", "MCP Browser Use"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::OpenRouter,
        &server,
        ProviderOptions::default().with_api_key("or-key"),
    );
    let response = client.generate(&ChatRequest::prompt("ping")).await.unwrap();
    assert_eq!(response.content, "ok");
}

#[tokio::test]
async fn test_azure_deployment_url_and_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4o/chat/completions"))
        .and(query_param("api-version", "2025-01-01-preview"))
        .and(header("api-key", "az-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("azure")))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::AzureOpenAI,
        &server,
        ProviderOptions::default().with_api_key("az-key"),
    );
    let response = client.generate(&ChatRequest::prompt("ping")).await.unwrap();
    assert_eq!(response.content, "azure");
}

#[tokio::test]
async fn test_anthropic_messages_moves_system_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-5-sonnet-20241022",
            "system": "Be brief.",
            "messages": [{ "role": "user", "content": "Say hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_1",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{ "type": "text", "text": "Hello." }],
            "usage": { "input_tokens": 9, "output_tokens": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::Anthropic,
        &server,
        ProviderOptions::default().with_api_key("sk-ant"),
    );
    let response = client.generate(&conversation()).await.unwrap();

    assert_eq!(response.content, "Hello.");
    assert_eq!(response.usage.unwrap().input_tokens, 9);
}

#[tokio::test]
async fn test_google_generate_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash-exp:generateContent"))
        .and(header("x-goog-api-key", "g-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "Be brief." }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Say hi" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hey" }] }
            }],
            "usageMetadata": { "promptTokenCount": 5, "candidatesTokenCount": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::Google,
        &server,
        ProviderOptions::default().with_api_key("g-key"),
    );
    let response = client.generate(&conversation()).await.unwrap();

    assert_eq!(response.content, "Hey");
    assert_eq!(response.usage.unwrap().output_tokens, 1);
}

#[tokio::test]
async fn test_ollama_chat_sends_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "qwen2.5:7b",
            "stream": false,
            "options": { "num_ctx": 32000, "num_predict": 1024 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "qwen2.5:7b",
            "message": { "role": "assistant", "content": "<think>kept</think>plain" },
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(ProviderKind::Ollama, &server, ProviderOptions::default());
    let response = client.generate(&ChatRequest::prompt("hi")).await.unwrap();

    assert_eq!(response.content, "<think>kept</think>plain");
    assert!(response.reasoning.is_none());
}

#[tokio::test]
async fn test_ollama_deepseek_r1_splits_think_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "deepseek-r1:14b",
            "message": {
                "role": "assistant",
                "content": "<think>\nThe user wants a greeting.\n</think>\n\nHello there"
            },
            "prompt_eval_count": 7,
            "eval_count": 20,
            "done": true
        })))
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::Ollama,
        &server,
        ProviderOptions::default().with_model_name("deepseek-r1:14b"),
    );
    let response = client.generate(&ChatRequest::prompt("hi")).await.unwrap();

    assert_eq!(response.content, "Hello there");
    assert_eq!(
        response.reasoning.as_deref(),
        Some("The user wants a greeting.")
    );
}

#[tokio::test]
async fn test_rate_limited_response_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("after retry")))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::OpenAI,
        &server,
        ProviderOptions::default().with_api_key("sk-test"),
    );
    let response = client.generate(&ChatRequest::prompt("hi")).await.unwrap();
    assert_eq!(response.content, "after retry");
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .expect(1)
        .mount(&server)
        .await;

    let client = model(
        ProviderKind::OpenAI,
        &server,
        ProviderOptions::default().with_api_key("sk-wrong"),
    );
    let err = client
        .generate(&ChatRequest::prompt("hi"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_limiter_is_consulted_per_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .mount(&server)
        .await;

    let limiter = RateLimiter::new(&tollgate_rate_limit::RateLimitConfig::per_minute(
        std::num::NonZeroU32::new(10).unwrap(),
    ));
    let env: HashMap<String, String> = HashMap::new();
    let client = ChatModel::resolve(
        ProviderKind::OpenAI,
        &ProviderOptions::default()
            .with_api_key("sk-test")
            .with_base_url(server.uri()),
        &env,
        limiter.clone(),
    )
    .unwrap();

    client.generate(&ChatRequest::prompt("one")).await.unwrap();
    client.generate(&ChatRequest::prompt("two")).await.unwrap();

    assert_eq!(limiter.window_len(), 2);
}
