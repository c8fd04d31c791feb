//! Model identifier value object

use super::tier::ModelTier;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chatbot model labels (Value Object)
///
/// A label names both the corpus the bot answers from and, through
/// [`ModelId::tier`], how much text the bot is allowed to generate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ModelId {
    #[default]
    Gpt5o,
    Gpt5oMini,
    Custom(String),
}

impl ModelId {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Gpt5o => "GPT-5o",
            ModelId::Gpt5oMini => "GPT-5o-mini",
            ModelId::Custom(s) => s,
        }
    }

    /// Tier implied by the label. Unknown labels get the lowest tier.
    pub fn tier(&self) -> ModelTier {
        match self {
            ModelId::Gpt5o => ModelTier::Premium,
            ModelId::Gpt5oMini | ModelId::Custom(_) => ModelTier::Economy,
        }
    }

    /// Labels offered to the user
    pub fn known_models() -> Vec<ModelId> {
        vec![ModelId::Gpt5o, ModelId::Gpt5oMini]
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelId::from(s))
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        match s.trim() {
            "GPT-5o" | "gpt-5o" => ModelId::Gpt5o,
            "GPT-5o-mini" | "gpt-5o-mini" => ModelId::Gpt5oMini,
            other => ModelId::Custom(other.to_string()),
        }
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ModelId::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in ModelId::known_models() {
            let parsed: ModelId = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_tier_mapping() {
        assert_eq!(ModelId::Gpt5o.tier(), ModelTier::Premium);
        assert_eq!(ModelId::Gpt5oMini.tier(), ModelTier::Economy);
        assert_eq!(ModelId::from("llama-local").tier(), ModelTier::Economy);
    }

    #[test]
    fn test_custom_keeps_label() {
        let model = ModelId::from("house-model");
        assert_eq!(model, ModelId::Custom("house-model".to_string()));
        assert_eq!(model.as_str(), "house-model");
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&ModelId::Gpt5oMini).unwrap();
        assert_eq!(json, "\"GPT-5o-mini\"");
        let model: ModelId = serde_json::from_str("\"GPT-5o\"").unwrap();
        assert_eq!(model, ModelId::Gpt5o);
    }
}
