//! Output format value object

use serde::{Deserialize, Serialize};

/// How answers are written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain answer text (default)
    #[default]
    Text,
    /// One JSON object per answer, including the match path
    Json,
}
