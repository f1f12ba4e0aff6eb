//! Take 5 API Server
//!
//! Router assembly shared by the Shuttle binary and the local binary.

use anyhow::Context;
use axum::{response::IntoResponse, response::Response, Router};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use take5::Intent;

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

#[cfg(test)]
mod testing;

use adapters::{build_provider, http::build_client};
use application::ResponseDispatcher;
use config::AppConfig;
use error::ApiError;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<ResponseDispatcher>,
}

/// Build the fully wired router from configuration
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let catalog = config.load_personas()?;
    let client =
        build_client(config.provider_timeout).context("Failed to build provider HTTP client")?;

    let dispatcher = ResponseDispatcher::from_catalog(catalog, |intent, persona| {
        let provider = build_provider(persona, config, &client);
        match &provider {
            Some(p) => tracing::info!(
                "{} {} persona ready ({} / {})",
                persona_emoji(intent),
                intent,
                p.provider_name(),
                p.model_id()
            ),
            None => tracing::warn!(
                "⚠️  No {} set - {} persona will use its fallback reply",
                persona.provider.api_key_name(),
                intent
            ),
        }
        provider
    });

    tracing::info!(
        "⏱️  Provider timeout: {}s",
        config.provider_timeout.as_secs()
    );

    let router = build_router(AppState {
        dispatcher: Arc::new(dispatcher),
    });

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Take 5 API ready");

    Ok(router)
}

/// Mount every route on the given state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::chat::router())
        .merge(routes::health::router())
        .with_state(state);

    apply_middleware(router)
}

/// Panic recovery, request tracing and permissive CORS
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal.into_response()
}

fn persona_emoji(intent: Intent) -> &'static str {
    match intent {
        Intent::Emotional => "💛",
        Intent::Practical => "🧭",
    }
}
