//! Corpus domain
//!
//! Question/answer pairs grouped by model name. The corpus is pure data:
//! loading it from disk is an infrastructure concern.

pub mod entry;
pub mod store;

pub use entry::{QaEntry, RawQaEntry};
pub use store::Corpus;
