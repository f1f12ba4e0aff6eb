//! Chat Routes - Classify, dispatch, reply

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use uuid::Uuid;

use take5::Message;

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::AppState;

/// Reply to a chat message in the persona its intent calls for
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Persona reply (provider text or fallback)", body = ChatResponse),
        (status = 400, description = "Message is missing or blank", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected chat body: {}", rejection.body_text());
        ApiError::Internal
    })?;

    let message = Message::from_optional(request.message.as_deref())?;
    let request_id = Uuid::new_v4();

    let (classification, reply) = state.dispatcher.handle(&message).await;

    tracing::info!(
        %request_id,
        intent = %classification.intent,
        rule = %classification.rule,
        source = %reply.source,
        "Chat reply ready"
    );

    Ok(Json(ChatResponse::from(reply)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}
