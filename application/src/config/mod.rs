//! Application-level configuration.
//!
//! - [`GenerationParams`] — per-tier walk lengths and fallback messages

pub mod generation_params;

pub use generation_params::{GenerationParams, SingleAnswerGeneration, TierParams};
