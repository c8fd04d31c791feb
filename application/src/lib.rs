//! Application layer for chainbot
//!
//! This crate contains the answer pipeline use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, SingleAnswerGeneration, TierParams};
pub use ports::{
    corpus_loader::CorpusLoaderPort,
    unmatched_log::{InMemoryUnmatchedLog, NoUnmatchedLog, UnmatchedLog},
};
pub use use_cases::answer_question::{
    AnswerInput, AnswerOutput, AnswerPath, AnswerQuestionUseCase,
};
