//! Corpus store keyed by model name

use super::entry::QaEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All question/answer pairs, grouped by the model name they belong to
///
/// Loaded once at startup and only read afterwards, so it can be shared
/// behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    models: HashMap<String, Vec<QaEntry>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus holding a single model's entries
    pub fn single(model: impl Into<String>, entries: Vec<QaEntry>) -> Self {
        let mut corpus = Self::new();
        corpus.insert(model, entries);
        corpus
    }

    /// Replace the entries for `model`
    pub fn insert(&mut self, model: impl Into<String>, entries: Vec<QaEntry>) {
        self.models.insert(model.into(), entries);
    }

    /// Entries for `model` in load order. Unknown models have none.
    pub fn entries(&self, model: &str) -> &[QaEntry] {
        self.models.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Model names present in the corpus, sorted
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of entries across all models
    pub fn len(&self) -> usize {
        self.models.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
