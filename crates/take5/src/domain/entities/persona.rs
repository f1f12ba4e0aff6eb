//! Persona - Prompt and sampling parameters for one reply style
//!
//! Personas are configuration data, keyed by [`Intent`]. Swapping a persona's
//! tone, model or provider is a data change, not a code change.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Intent, Provider};

/// One reply persona
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persona {
    /// Backend that generates replies for this persona
    pub provider: Provider,
    /// Provider model ID
    pub model: String,
    /// System prompt sent with every request
    pub system_prompt: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Shown verbatim when the provider is unavailable or fails
    pub fallback: String,
}

/// The persona for every intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaCatalog {
    pub emotional: Persona,
    pub practical: Persona,
}

impl PersonaCatalog {
    pub fn get(&self, intent: Intent) -> &Persona {
        match intent {
            Intent::Emotional => &self.emotional,
            Intent::Practical => &self.practical,
        }
    }
}
