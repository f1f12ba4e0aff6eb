//! Take 5 API Routes
//!
//! - / - Static chat page
//! - /chat - Intent-routed reply
//! - /health - Liveness
//! - /swagger-ui - API documentation

pub mod chat;
pub mod health;
pub mod swagger;
