//! HTTP chat client for every supported provider.

use crate::wire::{anthropic, google, ollama, openai};
use crate::{ChatModelSettings, Dialect, EnvLookup, ProviderKind, ProviderOptions};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tollgate_core::{ChatRequest, ChatResponse};
use tollgate_error::{
    ModelsError, ModelsErrorKind, ModelsResult, ProviderError, ProviderErrorKind, TollgateResult,
};
use tollgate_interface::ChatDriver;
use tollgate_rate_limit::RateLimiter;
use tracing::{debug, error, instrument};

/// A resolved chat model bound to one provider.
///
/// Every call to [`ChatDriver::generate`] goes through the shared
/// [`RateLimiter`]: admission is acquired before each attempt and transient
/// failures (transport errors, 408, 429, 5xx) are retried with backoff.
#[derive(Debug, Clone)]
pub struct ChatModel {
    settings: ChatModelSettings,
    client: Client,
    limiter: RateLimiter,
}

impl ChatModel {
    /// Build a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::ClientBuild`] if a provider header is not a
    /// valid HTTP header or the HTTP client cannot be created.
    #[instrument(skip_all, fields(provider = %settings.provider(), model = %settings.model()))]
    pub fn new(settings: ChatModelSettings, limiter: RateLimiter) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        for (name, value) in settings.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ProviderError::new(ProviderErrorKind::ClientBuild(format!(
                    "Invalid header name {}: {}",
                    name, e
                )))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ProviderError::new(ProviderErrorKind::ClientBuild(format!(
                    "Invalid value for header {}: {}",
                    name, e
                )))
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::ClientBuild(e.to_string())))?;

        debug!("Created chat model client");
        Ok(Self {
            settings,
            client,
            limiter,
        })
    }

    /// Resolve `options` for `provider` and build the client.
    ///
    /// # Errors
    ///
    /// See [`ChatModelSettings::resolve`] and [`ChatModel::new`].
    pub fn resolve(
        provider: ProviderKind,
        options: &ProviderOptions,
        env: &dyn EnvLookup,
        limiter: RateLimiter,
    ) -> Result<Self, ProviderError> {
        let settings = ChatModelSettings::resolve(provider, options, env)?;
        Self::new(settings, limiter)
    }

    /// Resolved settings.
    pub fn settings(&self) -> &ChatModelSettings {
        &self.settings
    }

    /// Shared rate limiter this client acquires from.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    fn bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.settings.api_key() {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    fn api_key(&self) -> &str {
        self.settings.api_key().as_deref().unwrap_or_default()
    }

    /// One attempt, no rate limiting or retry.
    #[instrument(skip(self, req), fields(provider = %self.settings.provider(), model = %self.settings.model()))]
    async fn send_once(&self, req: &ChatRequest) -> ModelsResult<ChatResponse> {
        let base = self.settings.base();
        match self.settings.dialect() {
            Dialect::OpenAICompatible => {
                let url = format!("{}/chat/completions", base);
                let body = openai::to_request(&self.settings, req);
                let builder = self.bearer(self.client.post(&url)).json(&body);
                let response: openai::CompletionResponse = send_json(builder, &url).await?;
                openai::from_response(&self.settings, response)
            }
            Dialect::AzureOpenAI => {
                let url = format!(
                    "{}/openai/deployments/{}/chat/completions?api-version={}",
                    base,
                    self.settings.model(),
                    self.settings.api_version().as_deref().unwrap_or_default()
                );
                let body = openai::to_request(&self.settings, req);
                let builder = self
                    .client
                    .post(&url)
                    .header("api-key", self.api_key())
                    .json(&body);
                let response: openai::CompletionResponse = send_json(builder, &url).await?;
                openai::from_response(&self.settings, response)
            }
            Dialect::Anthropic => {
                let url = format!("{}/v1/messages", base);
                let body = anthropic::to_request(&self.settings, req)?;
                let builder = self
                    .client
                    .post(&url)
                    .header("x-api-key", self.api_key())
                    .header("anthropic-version", anthropic::ANTHROPIC_VERSION)
                    .json(&body);
                let response: anthropic::MessagesResponse = send_json(builder, &url).await?;
                Ok(anthropic::from_response(response))
            }
            Dialect::Google => {
                let url = format!("{}/models/{}:generateContent", base, self.settings.model());
                let body = google::to_request(&self.settings, req)?;
                let builder = self
                    .client
                    .post(&url)
                    .header("x-goog-api-key", self.api_key())
                    .json(&body);
                let response: google::GenerateContentResponse = send_json(builder, &url).await?;
                google::from_response(response)
            }
            Dialect::Ollama => {
                let url = format!("{}/api/chat", base);
                let body = ollama::to_request(&self.settings, req);
                let builder = self.client.post(&url).json(&body);
                let response: ollama::OllamaChatResponse = send_json(builder, &url).await?;
                Ok(ollama::from_response(&self.settings, response))
            }
        }
    }
}

/// Send a prepared request and decode a JSON body, mapping failures onto
/// [`ModelsErrorKind`].
async fn send_json<T: DeserializeOwned>(builder: RequestBuilder, url: &str) -> ModelsResult<T> {
    debug!(url = %url, "Sending chat request");

    let response = builder.send().await.map_err(|e| {
        error!(error = ?e, "Failed to send chat request");
        ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Provider returned error");
        return Err(ModelsError::new(ModelsErrorKind::Api {
            status: status.as_u16(),
            message: body,
        }));
    }

    response.json().await.map_err(|e| {
        error!(error = ?e, "Failed to parse provider response");
        ModelsError::new(ModelsErrorKind::Parse(e.to_string()))
    })
}

#[async_trait]
impl ChatDriver for ChatModel {
    #[instrument(skip(self, req), fields(provider = %self.settings.provider(), model = %self.settings.model()))]
    async fn generate(&self, req: &ChatRequest) -> TollgateResult<ChatResponse> {
        let response = self.limiter.execute(|| self.send_once(req)).await?;
        debug!(
            content_len = response.content.len(),
            has_reasoning = response.reasoning.is_some(),
            "Received chat response"
        );
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.settings.provider().id()
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}
