//! Support chat — relays a parent's message to the provider under a fixed persona.

pub mod handlers;
pub mod prompts;
pub mod proxy;

pub use proxy::{ChatOutcome, ChatProxy};
