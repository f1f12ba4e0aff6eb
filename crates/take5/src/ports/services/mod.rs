//! Service Ports
//!
//! Abstract interfaces for external services.

mod persona_provider;

pub use persona_provider::*;
