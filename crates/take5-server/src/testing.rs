//! Test doubles shared by the server's unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use take5::{
    ChatMessage, CompletionOptions, CompletionResponse, Persona, PersonaCatalog, PersonaProvider,
    Provider, ProviderError, TokenUsage,
};

use crate::application::{PersonaRoute, ResponseDispatcher};

pub const EMOTIONAL_FALLBACK: &str = "You matter. Please reach out to a crisis helpline.";
pub const PRACTICAL_FALLBACK: &str = "Call 911 in an emergency.";

pub fn persona(provider: Provider, system_prompt: &str, fallback: &str) -> Persona {
    let model = match provider {
        Provider::Anthropic => "claude-test",
        Provider::OpenAI => "gpt-test",
    };
    Persona {
        provider,
        model: model.to_string(),
        system_prompt: system_prompt.to_string(),
        max_tokens: 500,
        temperature: 0.7,
        fallback: fallback.to_string(),
    }
}

pub fn catalog() -> PersonaCatalog {
    PersonaCatalog {
        emotional: persona(Provider::Anthropic, "Be warm.", EMOTIONAL_FALLBACK),
        practical: persona(Provider::OpenAI, "Be clear.", PRACTICAL_FALLBACK),
    }
}

/// Provider that answers from a script and counts calls
pub struct StubProvider {
    outcome: Result<String, ProviderError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersonaProvider for StubProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(|content| CompletionResponse {
            content,
            model: "stub".to_string(),
            usage: TokenUsage::default(),
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model_id(&self) -> &str {
        "stub"
    }
}

fn as_port(stub: Option<Arc<StubProvider>>) -> Option<Arc<dyn PersonaProvider>> {
    stub.map(|s| s as Arc<dyn PersonaProvider>)
}

/// Dispatcher over the test catalog with the given providers
pub fn dispatcher(
    emotional: Option<Arc<StubProvider>>,
    practical: Option<Arc<StubProvider>>,
) -> ResponseDispatcher {
    let catalog = catalog();
    ResponseDispatcher::new(
        PersonaRoute::new(catalog.emotional, as_port(emotional)),
        PersonaRoute::new(catalog.practical, as_port(practical)),
    )
}
