//! JSON corpus loader
//!
//! Reads a document mapping model names to question/answer records:
//!
//! ```json
//! {
//!   "GPT-5o": [
//!     { "question": "hello", "answer": "Hi there! How can I help?" }
//!   ]
//! }
//! ```
//!
//! Records that are not objects, or whose fields are missing or not
//! strings, are skipped with a warning. A missing file
//! yields an empty corpus, so the bot still starts and answers every
//! question with its fallback.

use super::error::{CorpusLoadError, Result};
use chainbot_application::CorpusLoaderPort;
use chainbot_domain::{Corpus, QaEntry, RawQaEntry};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Corpus loader that reads a JSON file from the local file system.
#[derive(Debug, Clone)]
pub struct JsonCorpusLoader {
    path: PathBuf,
}

impl JsonCorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a corpus document from a string.
    ///
    /// `origin` is only used in error messages.
    pub fn parse_str(content: &str, origin: &Path) -> Result<Corpus> {
        let raw: HashMap<String, Vec<Value>> =
            serde_json::from_str(content).map_err(|source| CorpusLoadError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut corpus = Corpus::new();
        for (model, records) in raw {
            let total = records.len();
            let entries: Vec<QaEntry> = records
                .into_iter()
                .enumerate()
                .filter_map(|(index, record)| match Self::parse_record(record) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("Skipping corpus entry {} of {}: {}", index, model, e);
                        None
                    }
                })
                .collect();
            debug!("Loaded {}/{} entries for {}", entries.len(), total, model);
            corpus.insert(model, entries);
        }
        Ok(corpus)
    }

    /// Convert one record, reporting why it is unusable
    fn parse_record(record: Value) -> std::result::Result<QaEntry, String> {
        let raw: RawQaEntry = serde_json::from_value(record).map_err(|e| e.to_string())?;
        QaEntry::try_from(raw).map_err(|e| e.to_string())
    }
}

impl CorpusLoaderPort for JsonCorpusLoader {
    type Error = CorpusLoadError;

    fn load(&self) -> Result<Corpus> {
        if !self.path.exists() {
            warn!(
                "Corpus file {} not found, continuing with an empty corpus",
                self.path.display()
            );
            return Ok(Corpus::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| CorpusLoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let corpus = Self::parse_str(&content, &self.path)?;
        info!(
            "Loaded corpus from {} ({} entries, models: {})",
            self.path.display(),
            corpus.len(),
            corpus.model_names().join(", ")
        );
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_malformed_entries() {
        let content = r#"{
            "GPT-5o": [
                {"question": "hello", "answer": "hi there"},
                {"question": "no answer"},
                {"answer": "no question"},
                {"question": "bye", "answer": "see you"}
            ]
        }"#;
        let corpus = JsonCorpusLoader::parse_str(content, Path::new("inline")).unwrap();
        let entries = corpus.entries("GPT-5o");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], QaEntry::new("hello", "hi there"));
        assert_eq!(entries[1], QaEntry::new("bye", "see you"));
    }

    #[test]
    fn test_parse_skips_wrong_typed_and_null_records() {
        let content = r#"{
            "GPT-5o": [
                {"question": "hello", "answer": "hi"},
                {"question": 5, "answer": "x"},
                null,
                "just a string",
                {"question": "bye", "answer": ["see", "you"]}
            ]
        }"#;
        let corpus = JsonCorpusLoader::parse_str(content, Path::new("inline")).unwrap();
        assert_eq!(corpus.entries("GPT-5o"), &[QaEntry::new("hello", "hi")]);
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = JsonCorpusLoader::parse_str("[1, 2", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, CorpusLoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gpt-5o.json");
        fs::write(
            &path,
            r#"{"GPT-5o": [{"question": "hello", "answer": "hi"}], "GPT-5o-mini": []}"#,
        )
        .unwrap();

        let corpus = JsonCorpusLoader::new(&path).load().unwrap();
        assert_eq!(corpus.entries("GPT-5o").len(), 1);
        assert_eq!(corpus.model_names(), vec!["GPT-5o", "GPT-5o-mini"]);
    }

    #[test]
    fn test_missing_file_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonCorpusLoader::new(dir.path().join("absent.json"));
        assert!(loader.load().unwrap().is_empty());
    }
}
