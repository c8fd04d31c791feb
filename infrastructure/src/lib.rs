//! Infrastructure layer for chainbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: corpus loading, the unmatched-question
//! log, randomness and configuration file loading.

pub mod config;
pub mod corpus;
pub mod logging;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCorpusConfig, FileGenerationConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig, FileTierConfig, FileUnmatchedConfig,
};
pub use corpus::{CorpusLoadError, JsonCorpusLoader};
pub use logging::{JsonlUnmatchedLog, UnmatchedLogError};
pub use random::RngRandomSource;
