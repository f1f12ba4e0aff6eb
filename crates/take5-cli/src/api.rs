//! Take 5 API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Take 5 server
pub struct Take5Client {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "type")]
    pub response_type: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub app: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: String,
}

impl Take5Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check the server is up
    pub async fn health(&self) -> Result<HealthReply> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Take 5 API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Send a message and get the persona reply
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .context("Failed to connect to Take 5 API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorReply>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, detail);
        }

        resp.json().await.context("Failed to parse response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_chat_posts_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "message": "I feel lonely" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "I'm here with you.",
                "type": "emotional",
                "detected_intent": "emotional"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Take5Client::new(&format!("{}/", server.uri()));
        let reply = client.chat("I feel lonely").await.unwrap();

        assert_eq!(reply.response, "I'm here with you.");
        assert_eq!(reply.response_type, "emotional");
    }

    #[tokio::test]
    async fn test_chat_surfaces_server_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Message is required" })),
            )
            .mount(&server)
            .await;

        let err = Take5Client::new(&server.uri())
            .chat(" ")
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("Message is required"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "app": "Take 5 Chatbot"
            })))
            .mount(&server)
            .await;

        let health = Take5Client::new(&server.uri()).health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.app, "Take 5 Chatbot");
    }
}
