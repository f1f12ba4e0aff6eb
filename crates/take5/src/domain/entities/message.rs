//! Message Entity
//!
//! A single inbound chat message. Only exists in validated form: the text is
//! trimmed and never empty.

use serde::Serialize;

use crate::domain::errors::DomainError;

/// A validated user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    /// Trim the raw text and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::message_required());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional field from a request body
    pub fn from_optional(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or_else(|| Err(DomainError::message_required()), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let message = Message::parse("\t  hello there \n").unwrap();
        assert_eq!(message.as_str(), "hello there");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        for raw in ["", " ", "\n\t", "   \r\n  "] {
            assert_eq!(
                Message::parse(raw),
                Err(DomainError::message_required()),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert_eq!(
            Message::from_optional(None),
            Err(DomainError::message_required())
        );
        assert!(Message::from_optional(Some("hi")).is_ok());
    }

    #[test]
    fn test_validation_error_text() {
        assert_eq!(
            DomainError::message_required().to_string(),
            "Message is required"
        );
    }
}
