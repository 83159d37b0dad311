//! Developmental screening — scores the six-question intake form.

pub mod handlers;
pub mod models;
pub mod questions;
pub mod scorer;

pub use models::{ScreeningInput, ScreeningResult};
pub use scorer::{analyze_screening, ScoringPolicy};
