//! Corpus loading from the local file system.

pub mod error;
mod json_loader;

pub use error::CorpusLoadError;
pub use json_loader::JsonCorpusLoader;
