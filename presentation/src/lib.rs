//! Presentation layer for chainbot
//!
//! This crate contains CLI definitions, output formatters,
//! the typing indicator, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::presenter::AnswerPresenter;
pub use output::typewriter::{Typewriter, chunk_words};
pub use progress::typing::TypingIndicator;
