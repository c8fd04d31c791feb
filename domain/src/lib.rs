//! Domain layer for chainbot
//!
//! This crate contains the core answer-synthesis logic: corpus entities,
//! matching, selection and Markov chain generation. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Corpus
//!
//! A fixed set of question/answer pairs per model label. Queries are
//! matched against the questions, first exactly and then by word overlap.
//!
//! ## Chain
//!
//! The answers of the matched entries are turned into a word transition
//! table and walked from the first word of the selected answer, so the
//! reply starts where a real answer started but wanders between answers.
//!
//! ## Tier
//!
//! - **Premium**: longer walks, generation even for single answers
//! - **Economy**: short walks, verbatim single answers, terse fallback

pub mod config;
pub mod core;
pub mod corpus;
pub mod markov;
pub mod matching;
pub mod random;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    model::ModelId,
    question::{Query, normalize, words},
    tier::ModelTier,
};
pub use corpus::{Corpus, QaEntry, RawQaEntry};
pub use markov::{MarkovChain, walk};
pub use matching::{
    FuzzyMatch, candidate_weight, distinct_answers, find_exact, find_fuzzy, similarity,
    weighted_pick,
};
pub use random::{RandomSource, ScriptedRandom};
