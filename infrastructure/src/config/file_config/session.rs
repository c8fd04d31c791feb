//! Session configuration from TOML (`[session]` section)

use chainbot_domain::{ConfigIssue, ConfigIssueCode, ModelId, ModelTier};
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
///
/// # Example
///
/// ```toml
/// [session]
/// model = "GPT-5o-mini"   # model label, implies the tier
/// tier = "premium"        # optional explicit tier
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Model label shown to the user
    pub model: String,
    /// Explicit tier, overriding the one implied by `model`
    pub tier: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default().as_str().to_string(),
            tier: None,
        }
    }
}

impl FileSessionConfig {
    pub fn model(&self) -> ModelId {
        ModelId::from(self.model.as_str())
    }

    /// Resolve the tier: explicit `tier` first, then the model label.
    ///
    /// An unrecognized `tier` value falls back to economy with a warning.
    pub fn resolve_tier(&self) -> (ModelTier, Vec<ConfigIssue>) {
        let Some(tier) = &self.tier else {
            return (self.model().tier(), vec![]);
        };

        let (resolved, fell_back) = ModelTier::parse_lenient(Some(tier));
        if !fell_back {
            return (resolved, vec![]);
        }

        let issue = ConfigIssue::warning(
            ConfigIssueCode::InvalidEnumValue {
                field: "session.tier".to_string(),
                value: tier.clone(),
                valid_values: vec!["premium".to_string(), "economy".to_string()],
            },
            format!(
                "session.tier: unknown value '{}', falling back to 'economy'",
                tier
            ),
        );
        (resolved, vec![issue])
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.resolve_tier().1;
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "session.model".to_string(),
                },
                "session.model: model name cannot be empty",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_model() {
        let config = FileSessionConfig {
            model: "GPT-5o-mini".to_string(),
            tier: None,
        };
        assert_eq!(config.resolve_tier().0, ModelTier::Economy);
        assert_eq!(FileSessionConfig::default().resolve_tier().0, ModelTier::Premium);
    }

    #[test]
    fn test_explicit_tier_wins() {
        let config = FileSessionConfig {
            model: "GPT-5o-mini".to_string(),
            tier: Some("Premium".to_string()),
        };
        let (tier, issues) = config.resolve_tier();
        assert_eq!(tier, ModelTier::Premium);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_tier_warns_and_falls_back() {
        let config = FileSessionConfig {
            model: "GPT-5o".to_string(),
            tier: Some("gold".to_string()),
        };
        let (tier, issues) = config.resolve_tier();
        assert_eq!(tier, ModelTier::Economy);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("gold"));
    }
}
