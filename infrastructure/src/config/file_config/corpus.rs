//! Corpus configuration from TOML (`[corpus]` section)

use chainbot_domain::{ConfigIssue, ConfigIssueCode, ModelId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw corpus configuration from TOML
///
/// # Example
///
/// ```toml
/// [corpus]
/// path = "data/gpt-5o.json"   # JSON document keyed by model name
/// model = "GPT-5o"            # which key to answer from
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// Path to the corpus JSON file
    pub path: String,
    /// Key of the corpus inside the document
    pub model: String,
}

impl Default for FileCorpusConfig {
    fn default() -> Self {
        Self {
            path: "gpt-5o.json".to_string(),
            model: ModelId::default().as_str().to_string(),
        }
    }
}

impl FileCorpusConfig {
    pub fn path(&self) -> PathBuf {
        super::expand_home(&self.path)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "corpus.model".to_string(),
                },
                "corpus.model: corpus key cannot be empty",
            ));
        }
        issues
    }
}
