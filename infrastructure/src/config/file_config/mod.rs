//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod corpus;
mod generation;
mod output;
mod repl;
mod session;
mod unmatched;

pub use corpus::FileCorpusConfig;
pub use generation::{FileGenerationConfig, FileTierConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;
pub use unmatched::FileUnmatchedConfig;

use chainbot_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Corpus file and key
    pub corpus: FileCorpusConfig,
    /// Model label and tier
    pub session: FileSessionConfig,
    /// Unmatched-question log
    pub unmatched: FileUnmatchedConfig,
    /// Per-tier generation overrides
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks blank model labels, unknown tiers, zero generation lengths
    /// and blank fallback messages.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.corpus.validate());
        issues.extend(self.session.validate());
        issues.extend(self.generation.validate());
        issues
    }
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainbot_domain::{ConfigIssueCode, ModelTier, OutputFormat, Severity};

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.corpus.model, "GPT-5o");
        assert_eq!(config.session.model, "GPT-5o");
        assert!(config.unmatched.persist);
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[corpus]
path = "data/corpus.json"
model = "GPT-5o-mini"

[session]
model = "GPT-5o-mini"

[unmatched]
path = "/tmp/unmatched.jsonl"
persist = false

[generation.premium]
exact_multi_length = 60
fallback = "Let me think about that."

[generation.economy]
fuzzy_length = 10

[output]
format = "json"
color = false
typing_delay_ms = 50

[repl]
history_file = "/tmp/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.corpus.path, "data/corpus.json");
        assert_eq!(config.corpus.model, "GPT-5o-mini");
        assert_eq!(config.session.resolve_tier().0, ModelTier::Economy);
        assert!(!config.unmatched.persist);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.typing_delay_ms, 50);
        assert_eq!(
            config.repl.history_file,
            Some("/tmp/history.txt".to_string())
        );

        let params = config.generation.to_generation_params();
        assert_eq!(params.premium.exact_multi_length, 60);
        assert_eq!(params.premium.fallback, "Let me think about that.");
        assert_eq!(params.premium.fuzzy_length, 45);
        assert_eq!(params.economy.fuzzy_length, 10);
        assert_eq!(params.economy.fallback, "Sorry, I don't know that.");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[session]\ntier = \"premium\"\n").unwrap();
        assert_eq!(config.corpus, FileCorpusConfig::default());
        assert_eq!(config.session.model, "GPT-5o");
        assert_eq!(config.session.resolve_tier().0, ModelTier::Premium);
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[session]
model = ""
tier = "platinum"

[generation.premium]
exact_multi_length = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert!(ConfigIssue::has_errors(&issues));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, value, .. }
                if field == "session.tier" && value == "platinum"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyModelName { field } if field == "session.model"
        )));
        assert!(issues.iter().any(|i| i.severity == Severity::Warning
            && matches!(&i.code, ConfigIssueCode::ZeroLength { .. })));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("rel/path"), PathBuf::from("rel/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.jsonl"), home.join("x.jsonl"));
        }
    }
}
