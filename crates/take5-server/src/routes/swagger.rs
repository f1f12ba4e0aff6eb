//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use take5::Intent;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(super::chat::chat, super::health::health_check),
    components(schemas(ChatRequest, ChatResponse, ErrorResponse, HealthCheck, Intent)),
    tags(
        (name = "Chat", description = "Intent-routed persona replies"),
        (name = "Health", description = "Liveness")
    ),
    info(
        title = "Take 5 Chatbot API",
        description = "Classifies each message as emotional or practical and answers in the matching persona"
    )
)]
pub struct ApiDoc;
