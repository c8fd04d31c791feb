//! Generation parameters: per-tier walk lengths and fallback messages.
//!
//! [`GenerationParams`] groups the static knobs the
//! [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase)
//! applies for each [`ModelTier`]. These are application-layer concerns,
//! not domain policy.

use chainbot_domain::ModelTier;
use serde::{Deserialize, Serialize};

/// Generation for a question with exactly one matching answer.
///
/// The walk length is `min(cap, answer_word_count + extra_words)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleAnswerGeneration {
    pub cap: usize,
    pub extra_words: usize,
}

impl SingleAnswerGeneration {
    pub const DEFAULT: Self = Self {
        cap: 40,
        extra_words: 10,
    };

    pub fn length_for(&self, answer_words: usize) -> usize {
        self.cap.min(answer_words + self.extra_words)
    }
}

/// Parameters for one tier.
///
/// | Path                        | Field                |
/// |-----------------------------|----------------------|
/// | exact match, many answers   | `exact_multi_length` |
/// | exact match, single answer  | `single_answer`      |
/// | fuzzy match, many answers   | `fuzzy_length`       |
/// | no match                    | `fallback`           |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierParams {
    pub exact_multi_length: usize,
    /// `None` returns a single exact answer verbatim
    pub single_answer: Option<SingleAnswerGeneration>,
    pub fuzzy_length: usize,
    pub fallback: String,
}

impl TierParams {
    pub fn premium() -> Self {
        Self {
            exact_multi_length: 50,
            single_answer: Some(SingleAnswerGeneration::DEFAULT),
            fuzzy_length: 45,
            fallback: "I don't know that yet, but here's a general helpful explanation."
                .to_string(),
        }
    }

    pub fn economy() -> Self {
        Self {
            exact_multi_length: 20,
            single_answer: None,
            fuzzy_length: 18,
            fallback: "Sorry, I don't know that.".to_string(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_exact_multi_length(mut self, length: usize) -> Self {
        self.exact_multi_length = length;
        self
    }

    pub fn with_single_answer(mut self, single: Option<SingleAnswerGeneration>) -> Self {
        self.single_answer = single;
        self
    }

    pub fn with_fuzzy_length(mut self, length: usize) -> Self {
        self.fuzzy_length = length;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

/// Generation parameters for both tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub premium: TierParams,
    pub economy: TierParams,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            premium: TierParams::premium(),
            economy: TierParams::economy(),
        }
    }
}

impl GenerationParams {
    pub fn for_tier(&self, tier: ModelTier) -> &TierParams {
        match tier {
            ModelTier::Premium => &self.premium,
            ModelTier::Economy => &self.economy,
        }
    }

    pub fn with_premium(mut self, params: TierParams) -> Self {
        self.premium = params;
        self
    }

    pub fn with_economy(mut self, params: TierParams) -> Self {
        self.economy = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        let premium = params.for_tier(ModelTier::Premium);
        assert_eq!(premium.exact_multi_length, 50);
        assert_eq!(premium.fuzzy_length, 45);
        assert!(premium.single_answer.is_some());

        let economy = params.for_tier(ModelTier::Economy);
        assert_eq!(economy.exact_multi_length, 20);
        assert_eq!(economy.fuzzy_length, 18);
        assert!(economy.single_answer.is_none());
        assert_eq!(economy.fallback, "Sorry, I don't know that.");
    }

    #[test]
    fn test_single_answer_length_is_capped() {
        let single = SingleAnswerGeneration::DEFAULT;
        assert_eq!(single.length_for(2), 12);
        assert_eq!(single.length_for(35), 40);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_economy(TierParams::economy().with_fuzzy_length(5).with_fallback("?"));
        assert_eq!(params.economy.fuzzy_length, 5);
        assert_eq!(params.economy.fallback, "?");
        assert_eq!(params.premium, TierParams::premium());
    }
}
