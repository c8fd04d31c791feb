//! Unmatched-question log configuration from TOML (`[unmatched]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw unmatched-log configuration from TOML
///
/// # Example
///
/// ```toml
/// [unmatched]
/// path = "~/.local/share/chainbot/unmatched.jsonl"
/// persist = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUnmatchedConfig {
    /// Log file; defaults to the platform data directory
    pub path: Option<String>,
    /// Write unmatched questions to disk (otherwise kept in memory)
    pub persist: bool,
}

impl Default for FileUnmatchedConfig {
    fn default() -> Self {
        Self {
            path: None,
            persist: true,
        }
    }
}

impl FileUnmatchedConfig {
    /// Resolved log path: the configured one, else
    /// `$XDG_DATA_HOME/chainbot/unmatched.jsonl`, else `./unmatched.jsonl`
    pub fn path(&self) -> PathBuf {
        match &self.path {
            Some(path) => super::expand_home(path),
            None => Self::default_path(),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("chainbot").join("unmatched.jsonl"))
            .unwrap_or_else(|| PathBuf::from("unmatched.jsonl"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path() {
        let config = FileUnmatchedConfig {
            path: Some("/tmp/q.jsonl".to_string()),
            persist: true,
        };
        assert_eq!(config.path(), PathBuf::from("/tmp/q.jsonl"));
    }

    #[test]
    fn test_default_path_names_file() {
        let path = FileUnmatchedConfig::default().path();
        assert!(path.ends_with("unmatched.jsonl"));
    }
}
