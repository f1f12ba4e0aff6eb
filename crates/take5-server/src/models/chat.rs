//! Chat - Request/Response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use take5::{Intent, Reply};

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message; blank or missing is rejected
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    /// Persona that answered
    #[serde(rename = "type")]
    pub response_type: Intent,
    /// Intent detected by the classifier (always equal to `type`)
    pub detected_intent: Intent,
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        Self {
            response: reply.text,
            response_type: reply.intent,
            detected_intent: reply.intent,
        }
    }
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
