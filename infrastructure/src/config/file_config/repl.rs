//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

impl FileReplConfig {
    /// History file with `~/` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.as_deref().map(super::expand_home)
    }
}
