//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use chainbot_domain::OutputFormat;
use std::path::PathBuf;
use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print answers a few words at a time
    pub typing: bool,
    /// Pause between chunks when typing
    pub typing_delay: Duration,
    /// Suppress the typing indicator
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            typing: true,
            typing_delay: Duration::from_millis(100),
            quiet: false,
        }
    }
}

impl OutputConfig {
    /// Gradual display only applies to text output
    pub fn gradual(&self) -> bool {
        self.typing && self.format == OutputFormat::Text
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// Configured history file, else `$XDG_DATA_HOME/chainbot/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("chainbot").join("history.txt")))
    }
}
