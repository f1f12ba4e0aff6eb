//! Take 5 API Data Models
//!
//! - Chat: message in, persona reply out
//! - Health: liveness probe

mod chat;
mod health;

pub use chat::*;
pub use health::*;
