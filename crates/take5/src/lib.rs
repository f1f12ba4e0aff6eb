//! Take 5 Domain Library
//!
//! Core domain types and interfaces for the Take 5 support chatbot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Message, Persona, Reply)
//!   - `value_objects/`: Immutable value types (Intent, Provider)
//!   - `services/`: Pure domain services (intent classifier)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (PersonaProvider)
//!
//! # Usage
//!
//! ```rust
//! use take5::{classify, Intent, Message};
//!
//! let message = Message::parse("  I'm struggling, what do I do?  ").unwrap();
//! assert_eq!(classify(message.as_str()), Intent::Emotional);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    classify, explain, Classification, ClassificationRule, DomainError, Intent, Message, Persona,
    PersonaCatalog, Provider, Reply, ReplySource,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, MessageRole, PersonaProvider,
    ProviderError, TokenUsage,
};
