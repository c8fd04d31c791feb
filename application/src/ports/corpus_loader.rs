//! Corpus loading port
//!
//! Loading happens once, before any question is answered. A loader must
//! resolve every problem to either a usable (possibly empty) [`Corpus`]
//! or an error the caller reports to the user.

use chainbot_domain::Corpus;

/// Source of the question/answer corpus
///
/// Implementations live in the infrastructure layer (e.g. a JSON file).
pub trait CorpusLoaderPort: Send + Sync {
    /// Error type for load failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full corpus for all models
    fn load(&self) -> Result<Corpus, Self::Error>;
}
