//! Response Dispatcher (Use Case)
//!
//! Picks the persona for a classified message, asks its provider for a reply
//! and degrades to the persona's fallback text on any provider failure.
//! Provider errors never leave this module.

use std::sync::Arc;

use take5::{
    explain, Classification, CompletionResponse, Intent, Message, Persona, PersonaCatalog,
    PersonaProvider, ProviderError, Reply,
};

/// A persona and the adapter that serves it
pub struct PersonaRoute {
    persona: Persona,
    provider: Option<Arc<dyn PersonaProvider>>,
}

impl PersonaRoute {
    pub fn new(persona: Persona, provider: Option<Arc<dyn PersonaProvider>>) -> Self {
        Self { persona, provider }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    async fn generate(&self, message: &Message) -> Result<CompletionResponse, ProviderError> {
        match &self.provider {
            Some(provider) => provider.generate(&self.persona, message.as_str()).await,
            None => Err(ProviderError::NotConfigured(
                self.persona.provider.api_key_name().to_string(),
            )),
        }
    }
}

/// Application service routing messages to personas
pub struct ResponseDispatcher {
    emotional: PersonaRoute,
    practical: PersonaRoute,
}

impl ResponseDispatcher {
    pub fn new(emotional: PersonaRoute, practical: PersonaRoute) -> Self {
        Self {
            emotional,
            practical,
        }
    }

    /// Build every route from the catalog, resolving each persona's adapter
    pub fn from_catalog<F>(catalog: PersonaCatalog, mut provider_for: F) -> Self
    where
        F: FnMut(Intent, &Persona) -> Option<Arc<dyn PersonaProvider>>,
    {
        let emotional_provider = provider_for(Intent::Emotional, catalog.get(Intent::Emotional));
        let practical_provider = provider_for(Intent::Practical, catalog.get(Intent::Practical));
        Self::new(
            PersonaRoute::new(catalog.emotional, emotional_provider),
            PersonaRoute::new(catalog.practical, practical_provider),
        )
    }

    pub fn route(&self, intent: Intent) -> &PersonaRoute {
        match intent {
            Intent::Emotional => &self.emotional,
            Intent::Practical => &self.practical,
        }
    }

    /// Reply to a message already classified as `intent`
    pub async fn respond(&self, message: &Message, intent: Intent) -> Reply {
        let route = self.route(intent);

        match route.generate(message).await {
            Ok(response) => {
                tracing::debug!(
                    "{} adapter replied via {} (prompt_tokens={}, completion_tokens={}, finish_reason={:?})",
                    adapter_name(intent),
                    response.model,
                    response.usage.prompt_tokens,
                    response.usage.completion_tokens,
                    response.finish_reason
                );
                Reply::generated(response.content, intent)
            }
            Err(ProviderError::NotConfigured(key)) => {
                tracing::debug!(
                    "{} adapter unconfigured ({} not set), using fallback",
                    adapter_name(intent),
                    key
                );
                Reply::fallback(route.persona.fallback.as_str(), intent)
            }
            Err(e) => {
                tracing::warn!(
                    "{} adapter failed via {} ({}): {}",
                    adapter_name(intent),
                    route.persona.provider,
                    route.persona.model,
                    e
                );
                Reply::fallback(route.persona.fallback.as_str(), intent)
            }
        }
    }

    /// Classify a message and reply to it
    pub async fn handle(&self, message: &Message) -> (Classification, Reply) {
        let classification = explain(message.as_str());
        let reply = self.respond(message, classification.intent).await;
        (classification, reply)
    }
}

fn adapter_name(intent: Intent) -> &'static str {
    match intent {
        Intent::Emotional => "Empathy",
        Intent::Practical => "Guidance",
    }
}
