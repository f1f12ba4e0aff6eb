//! Infrastructure Adapters
//!
//! Implementations of the domain's provider port.

mod anthropic;
pub mod http;
mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use reqwest::Client;
use std::sync::Arc;

use take5::{Persona, PersonaProvider, Provider};

use crate::config::AppConfig;

/// Build the adapter for a persona, or `None` when its credential is missing
pub fn build_provider(
    persona: &Persona,
    config: &AppConfig,
    client: &Client,
) -> Option<Arc<dyn PersonaProvider>> {
    let api_key = config.api_key(persona.provider)?;
    let base_url = config.base_url(persona.provider);

    let provider: Arc<dyn PersonaProvider> = match persona.provider {
        Provider::Anthropic => Arc::new(
            AnthropicProvider::new(client.clone(), api_key, persona.model.as_str())
                .with_base_url(base_url),
        ),
        Provider::OpenAI => Arc::new(
            OpenAiProvider::new(client.clone(), api_key, persona.model.as_str())
                .with_base_url(base_url),
        ),
    };
    Some(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::persona;

    #[test]
    fn test_missing_credential_builds_nothing() {
        let config = AppConfig::default();
        let client = Client::new();
        let persona = persona(Provider::Anthropic, "Be warm.", "fallback");
        assert!(build_provider(&persona, &config, &client).is_none());
    }

    #[test]
    fn test_provider_follows_persona_data() {
        let config = AppConfig {
            anthropic_api_key: Some("ak".to_string()),
            openai_api_key: Some("sk".to_string()),
            ..AppConfig::default()
        };
        let client = Client::new();

        let mut swapped = persona(Provider::OpenAI, "Be warm.", "fallback");
        swapped.model = "gpt-warm".to_string();
        let provider = build_provider(&swapped, &config, &client).unwrap();
        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.model_id(), "gpt-warm");

        let anthropic = persona(Provider::Anthropic, "Be warm.", "fallback");
        let provider = build_provider(&anthropic, &config, &client).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }
}
