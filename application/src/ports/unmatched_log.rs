//! Port for recording questions the corpus could not answer.
//!
//! Defines the [`UnmatchedLog`] trait. The answer pipeline appends the raw
//! question text whenever nothing in the corpus shares a word with it;
//! adapters decide how (and whether) to persist it.

use std::sync::Mutex;

/// Append-only log of unanswered questions.
///
/// `append` is synchronous and non-fallible: a storage failure must not
/// fail the answer. Implementations must accept concurrent appends.
pub trait UnmatchedLog: Send + Sync {
    /// Record a question exactly as the user typed it.
    fn append(&self, question: &str);

    /// Questions recorded so far, oldest first.
    fn entries(&self) -> Vec<String>;
}

/// In-memory log, used in tests and when persistence is disabled.
#[derive(Debug, Default)]
pub struct InMemoryUnmatchedLog {
    entries: Mutex<Vec<String>>,
}

impl InMemoryUnmatchedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UnmatchedLog for InMemoryUnmatchedLog {
    fn append(&self, question: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(question.to_string());
        }
    }

    fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

/// No-op implementation that discards every question.
pub struct NoUnmatchedLog;

impl UnmatchedLog for NoUnmatchedLog {
    fn append(&self, _question: &str) {}

    fn entries(&self) -> Vec<String> {
        Vec::new()
    }
}
