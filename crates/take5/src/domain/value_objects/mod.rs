//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod intent;
mod provider;

pub use intent::*;
pub use provider::*;
