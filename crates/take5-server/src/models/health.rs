//! Health - Liveness DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const APP_NAME: &str = "Take 5 Chatbot";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub app: String,
}

impl HealthCheck {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            app: APP_NAME.to_string(),
        }
    }
}
