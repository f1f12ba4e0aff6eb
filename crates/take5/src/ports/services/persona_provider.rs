//! Persona Provider Port
//!
//! Abstract interface for generative-text providers. Each persona is backed
//! by one implementation (Anthropic, OpenAI, or a test double); the
//! dispatcher only ever sees this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::Persona;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for LLM completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl From<&Persona> for CompletionOptions {
    fn from(persona: &Persona) -> Self {
        Self {
            max_tokens: persona.max_tokens,
            temperature: persona.temperature,
        }
    }
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
}

/// Provider failures. Never shown to the user: the dispatcher turns every
/// variant into the persona's fallback text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provider returned an empty response")]
    EmptyResponse,
}

/// Generative-text provider interface
///
/// # Example
///
/// ```rust,ignore
/// use take5::ports::PersonaProvider;
///
/// struct AnthropicProvider { /* ... */ }
///
/// #[async_trait]
/// impl PersonaProvider for AnthropicProvider {
///     async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
///         -> Result<CompletionResponse, ProviderError> {
///         // Call the Messages API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait PersonaProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Answer a single user message in the given persona.
    ///
    /// Blank content is an error; anything else is returned untouched.
    async fn generate(
        &self,
        persona: &Persona,
        message: &str,
    ) -> Result<CompletionResponse, ProviderError> {
        let messages = [
            ChatMessage::system(persona.system_prompt.as_str()),
            ChatMessage::user(message),
        ];
        let options = CompletionOptions::from(persona);
        let response = self.complete(&messages, &options).await?;

        if response.content.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(response)
    }

    /// Get the provider name (e.g., "anthropic", "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Provider;
    use std::sync::Mutex;

    struct Recorder {
        reply: String,
        seen: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
    }

    #[async_trait]
    impl PersonaProvider for Recorder {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            options: &CompletionOptions,
        ) -> Result<CompletionResponse, ProviderError> {
            self.seen
                .lock()
                .unwrap()
                .push((messages.to_vec(), options.clone()));
            Ok(CompletionResponse {
                content: self.reply.clone(),
                model: "recorder".to_string(),
                usage: TokenUsage::default(),
                finish_reason: None,
            })
        }

        fn provider_name(&self) -> &str {
            "recorder"
        }

        fn model_id(&self) -> &str {
            "recorder"
        }
    }

    fn persona() -> Persona {
        Persona {
            provider: Provider::OpenAI,
            model: "gpt-test".to_string(),
            system_prompt: "Be clear.".to_string(),
            max_tokens: 321,
            temperature: 0.3,
            fallback: "Call 911.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_sends_system_and_user_turns() {
        let provider = Recorder {
            reply: "  Step 1: breathe.  ".to_string(),
            seen: Mutex::new(Vec::new()),
        };

        let response = provider.generate(&persona(), "How do I start?").await.unwrap();
        assert_eq!(response.content, "  Step 1: breathe.  ");
        assert_eq!(response.model, "recorder");

        let seen = provider.seen.lock().unwrap();
        let (messages, options) = &seen[0];
        assert_eq!(
            messages,
            &vec![
                ChatMessage::system("Be clear."),
                ChatMessage::user("How do I start?")
            ]
        );
        assert_eq!(options.max_tokens, 321);
        assert_eq!(options.temperature, 0.3);
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_content() {
        let provider = Recorder {
            reply: " \n ".to_string(),
            seen: Mutex::new(Vec::new()),
        };

        let err = provider.generate(&persona(), "hello").await.unwrap_err();
        assert_eq!(err, ProviderError::EmptyResponse);
    }
}
