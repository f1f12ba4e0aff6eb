//! Reply Entity

use serde::Serialize;

use crate::domain::value_objects::Intent;

/// Where the reply text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Generated by the persona's provider
    Provider,
    /// The persona's pre-written fallback text
    Fallback,
}

impl std::fmt::Display for ReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplySource::Provider => write!(f, "provider"),
            ReplySource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Reply to a single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// Intent used for routing
    pub intent: Intent,
    pub source: ReplySource,
}

impl Reply {
    pub fn generated(text: String, intent: Intent) -> Self {
        Self {
            text,
            intent,
            source: ReplySource::Provider,
        }
    }

    pub fn fallback(text: impl Into<String>, intent: Intent) -> Self {
        Self {
            text: text.into(),
            intent,
            source: ReplySource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ReplySource::Fallback
    }
}
