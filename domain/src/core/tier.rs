//! Model tier value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Capability level of the answering model (Value Object)
///
/// The tier controls how long generated answers may grow and which
/// canned message is returned when nothing in the corpus matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Premium,
    /// Lowest-capability tier, also used when the tier is unknown
    #[default]
    Economy,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Premium => "premium",
            ModelTier::Economy => "economy",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, ModelTier::Premium)
    }

    /// Parse a tier label, mapping missing or unrecognized values to
    /// [`ModelTier::Economy`].
    ///
    /// Returns the tier together with a flag telling whether the fallback
    /// was applied, so callers can log it at their boundary.
    pub fn parse_lenient(value: Option<&str>) -> (Self, bool) {
        match value.map(str::parse::<ModelTier>) {
            Some(Ok(tier)) => (tier, false),
            Some(Err(_)) | None => (ModelTier::Economy, true),
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premium" => Ok(ModelTier::Premium),
            "economy" => Ok(ModelTier::Economy),
            other => Err(DomainError::UnknownTier(other.to_string())),
        }
    }
}
