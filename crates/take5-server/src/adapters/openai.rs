//! OpenAI Chat Completions adapter
//!
//! Backs the guidance persona by default. Works with any OpenAI-compatible
//! endpoint via `with_base_url`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use take5::{
    ChatMessage, CompletionOptions, CompletionResponse, PersonaProvider, ProviderError, TokenUsage,
};

use super::http::{error_from_response, map_transport_error};

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: "https://api.openai.com".to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Overrides the API base URL (Azure, local gateways, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[async_trait]
impl PersonaProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let payload: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|err| ProviderError::Parse(err.to_string()))?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)?;
        let usage = payload.usage.map_or_else(TokenUsage::default, |u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        });

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            model: payload.model,
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
