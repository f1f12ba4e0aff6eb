//! Application Layer (Use Cases)
//!
//! Orchestrates domain logic and provider adapters.

mod dispatcher;

pub use dispatcher::{PersonaRoute, ResponseDispatcher};
