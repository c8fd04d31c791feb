//! Generation configuration from TOML (`[generation]` section)

use chainbot_application::{GenerationParams, SingleAnswerGeneration, TierParams};
use chainbot_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
///
/// Every field is optional; unset fields keep the built-in tier defaults.
///
/// # Example
///
/// ```toml
/// [generation.premium]
/// exact_multi_length = 50
/// single_cap = 40
/// single_extra = 10
/// fuzzy_length = 45
///
/// [generation.economy]
/// generate_single = false
/// fallback = "Sorry, I don't know that."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub premium: FileTierConfig,
    pub economy: FileTierConfig,
}

/// Overrides for one tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTierConfig {
    /// Walk length for exact matches with several answers
    pub exact_multi_length: Option<usize>,
    /// Regenerate single exact answers through the chain
    pub generate_single: Option<bool>,
    /// Upper bound of the single-answer walk
    pub single_cap: Option<usize>,
    /// Steps allowed beyond the answer's own word count
    pub single_extra: Option<usize>,
    /// Walk length for fuzzy matches with several answers
    pub fuzzy_length: Option<usize>,
    /// Reply when nothing matches
    pub fallback: Option<String>,
}

impl FileTierConfig {
    /// Apply these overrides on top of `base`
    pub fn apply(&self, base: TierParams) -> TierParams {
        let single = match self.generate_single {
            Some(false) => None,
            Some(true) => Some(base.single_answer.unwrap_or(SingleAnswerGeneration::DEFAULT)),
            None => base.single_answer,
        }
        .map(|s| SingleAnswerGeneration {
            cap: self.single_cap.unwrap_or(s.cap),
            extra_words: self.single_extra.unwrap_or(s.extra_words),
        });

        TierParams {
            exact_multi_length: self.exact_multi_length.unwrap_or(base.exact_multi_length),
            single_answer: single,
            fuzzy_length: self.fuzzy_length.unwrap_or(base.fuzzy_length),
            fallback: self.fallback.clone().unwrap_or(base.fallback),
        }
    }

    fn validate(&self, tier: &str) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let lengths = [
            ("exact_multi_length", self.exact_multi_length),
            ("single_cap", self.single_cap),
            ("fuzzy_length", self.fuzzy_length),
        ];
        for (name, value) in lengths {
            if value == Some(0) {
                let field = format!("generation.{}.{}", tier, name);
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroLength {
                        field: field.clone(),
                    },
                    format!("{}: zero length limits generated answers to one word", field),
                ));
            }
        }
        if let Some(fallback) = &self.fallback
            && fallback.trim().is_empty()
        {
            let field = format!("generation.{}.fallback", tier);
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyFallback {
                    field: field.clone(),
                },
                format!("{}: fallback message is blank", field),
            ));
        }
        issues
    }
}

impl FileGenerationConfig {
    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams {
            premium: self.premium.apply(TierParams::premium()),
            economy: self.economy.apply(TierParams::economy()),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.premium.validate("premium");
        issues.extend(self.economy.validate("economy"));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let params = FileGenerationConfig::default().to_generation_params();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = FileGenerationConfig {
            premium: FileTierConfig {
                single_cap: Some(25),
                fuzzy_length: Some(30),
                ..Default::default()
            },
            economy: FileTierConfig {
                generate_single: Some(true),
                fallback: Some("Nope.".to_string()),
                ..Default::default()
            },
        };
        let params = config.to_generation_params();
        assert_eq!(params.premium.fuzzy_length, 30);
        assert_eq!(params.premium.single_answer.unwrap().cap, 25);
        assert_eq!(params.premium.exact_multi_length, 50);
        assert_eq!(
            params.economy.single_answer,
            Some(SingleAnswerGeneration::DEFAULT)
        );
        assert_eq!(params.economy.fallback, "Nope.");
    }

    #[test]
    fn test_disable_single_generation() {
        let config = FileGenerationConfig {
            premium: FileTierConfig {
                generate_single: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.to_generation_params().premium.single_answer.is_none());
    }

    #[test]
    fn test_validate_zero_and_blank() {
        let config = FileGenerationConfig {
            economy: FileTierConfig {
                fuzzy_length: Some(0),
                fallback: Some("  ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::ZeroLength { field } if field == "generation.economy.fuzzy_length"
        )));
    }
}
