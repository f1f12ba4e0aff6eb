//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// Error returned when a chat message is missing or blank
    pub fn message_required() -> Self {
        Self::Validation("Message is required".to_string())
    }
}
