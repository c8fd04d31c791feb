//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown model tier: {0}")]
    UnknownTier(String),

    #[error("Malformed corpus entry: missing {missing}")]
    MalformedEntry { missing: &'static str },
}
