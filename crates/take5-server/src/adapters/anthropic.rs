//! Anthropic Messages API adapter
//!
//! Backs the empathy persona by default. The system prompt travels in the
//! top-level `system` field, not as a message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use take5::{
    ChatMessage, CompletionOptions, CompletionResponse, MessageRole, PersonaProvider,
    ProviderError, TokenUsage,
};

use super::http::{error_from_response, map_transport_error};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: "https://api.anthropic.com".to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Overrides the API base URL (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Turn<'a>>,
}

#[derive(Serialize)]
struct Turn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

fn build_request<'a>(
    model: &'a str,
    messages: &'a [ChatMessage],
    options: &CompletionOptions,
) -> MessagesRequest<'a> {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == MessageRole::System)
        .map(|m| m.content.as_str())
        .collect();

    let turns = messages
        .iter()
        .filter_map(|m| {
            let role = match m.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
                MessageRole::System => return None,
            };
            Some(Turn {
                role,
                content: &m.content,
            })
        })
        .collect();

    MessagesRequest {
        model,
        max_tokens: options.max_tokens,
        temperature: options.temperature,
        system: (!system.is_empty()).then(|| system.join("\n\n")),
        messages: turns,
    }
}

fn extract_text(response: &MessagesResponse) -> String {
    response
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text.as_deref())
        .collect::<Vec<_>>()
        .join("")
}

#[async_trait]
impl PersonaProvider for AnthropicProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        let request = build_request(&self.model, messages, options);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let payload: MessagesResponse =
            serde_json::from_str(&body).map_err(|err| ProviderError::Parse(err.to_string()))?;

        Ok(CompletionResponse {
            content: extract_text(&payload),
            model: payload.model,
            usage: TokenUsage {
                prompt_tokens: payload.usage.input_tokens,
                completion_tokens: payload.usage.output_tokens,
            },
            finish_reason: payload.stop_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
