//! Logging infrastructure: persistent record of unanswered questions.
//!
//! Provides [`JsonlUnmatchedLog`], a JSONL file writer that implements
//! the [`UnmatchedLog`](chainbot_application::UnmatchedLog) port.

mod jsonl_unmatched_log;

pub use jsonl_unmatched_log::{JsonlUnmatchedLog, UnmatchedLogError};
