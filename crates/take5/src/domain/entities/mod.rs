//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Message: Validated inbound chat text
//! - Persona: Prompt and sampling parameters per intent
//! - Reply: Text returned to the user, with its routing intent

mod message;
mod persona;
mod reply;

pub use message::*;
pub use persona::*;
pub use reply::*;
