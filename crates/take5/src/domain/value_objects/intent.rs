//! Intent - Routing classification of a chat message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What kind of reply a message calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Distress, feelings, self-harm ideation: answered by the empathy persona
    Emotional,
    /// Questions, procedures, resources: answered by the guidance persona
    Practical,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Emotional => "emotional",
            Intent::Practical => "practical",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emotional" => Ok(Intent::Emotional),
            "practical" => Ok(Intent::Practical),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}
