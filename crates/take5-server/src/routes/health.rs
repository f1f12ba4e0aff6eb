//! Health and UI Routes

use axum::{response::Html, routing::get, Json, Router};

use crate::models::HealthCheck;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Liveness probe, independent of provider configuration
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck::healthy())
}

/// Static chat page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use crate::testing::dispatcher;
    use crate::{build_router, AppState};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        build_router(AppState {
            dispatcher: Arc::new(dispatcher(None, None)),
        })
    }

    #[tokio::test]
    async fn test_health_without_providers() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "status": "healthy", "app": "Take 5 Chatbot" }));
    }

    #[tokio::test]
    async fn test_index_serves_chat_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/chat"));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_chat() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"]["/chat"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
    }
}
