//! Answer Question use case.
//!
//! Turns a free-text question into a reply using the corpus of the
//! selected model. The four outcomes are evaluated in order:
//!
//! 1. Exact match with several distinct answers: walk a chain built from
//!    all of them
//! 2. Exact match with one answer: generate from it (premium) or return it
//!    verbatim (economy)
//! 3. Fuzzy match: walk a chain built from the best-scoring answers, or
//!    return the single answer verbatim
//! 4. No match: record the question and return the tier's fallback

use crate::config::{GenerationParams, TierParams};
use crate::ports::unmatched_log::{NoUnmatchedLog, UnmatchedLog};
use chainbot_domain::util::truncate_str;
use chainbot_domain::{
    Corpus, MarkovChain, ModelId, ModelTier, QaEntry, Query, RandomSource, distinct_answers,
    find_exact, find_fuzzy, walk, weighted_pick,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Which branch of the pipeline produced the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPath {
    /// Exact match, several distinct answers blended by the chain
    ExactMulti,
    /// Exact match, single answer regenerated through the chain
    ExactSingleGenerated,
    /// Exact match, single answer returned as stored
    ExactSingleVerbatim,
    /// Fuzzy match, several distinct answers blended by the chain
    FuzzyMulti,
    /// Fuzzy match, single answer returned as stored
    FuzzySingle,
    /// Nothing matched; fallback message returned
    NoMatch,
}

impl AnswerPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerPath::ExactMulti => "exact_multi",
            AnswerPath::ExactSingleGenerated => "exact_single_generated",
            AnswerPath::ExactSingleVerbatim => "exact_single_verbatim",
            AnswerPath::FuzzyMulti => "fuzzy_multi",
            AnswerPath::FuzzySingle => "fuzzy_single",
            AnswerPath::NoMatch => "no_match",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            AnswerPath::ExactMulti
                | AnswerPath::ExactSingleGenerated
                | AnswerPath::ExactSingleVerbatim
        )
    }
}

impl std::fmt::Display for AnswerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerInput {
    /// The user's question.
    pub query: Query,
    /// Key of the corpus to answer from.
    pub corpus_model: String,
    /// Tier controlling generation length and fallback tone.
    pub tier: ModelTier,
}

impl AnswerInput {
    /// Answer from the default model's corpus
    pub fn new(query: impl Into<Query>, tier: ModelTier) -> Self {
        Self {
            query: query.into(),
            corpus_model: ModelId::default().as_str().to_string(),
            tier,
        }
    }

    pub fn with_corpus_model(mut self, model: impl Into<String>) -> Self {
        self.corpus_model = model.into();
        self
    }
}

/// Reply produced by the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOutput {
    pub text: String,
    pub path: AnswerPath,
    pub tier: ModelTier,
}

impl AnswerOutput {
    fn new(text: impl Into<String>, path: AnswerPath, tier: ModelTier) -> Self {
        Self {
            text: text.into(),
            path,
            tier,
        }
    }
}

/// Use case for answering a question from the corpus.
///
/// Holds no mutable state of its own: the corpus is shared read-only and
/// randomness is supplied per call, so one instance may serve many
/// threads. The only side effect is appending to the [`UnmatchedLog`].
pub struct AnswerQuestionUseCase {
    corpus: Arc<Corpus>,
    unmatched_log: Arc<dyn UnmatchedLog>,
    params: GenerationParams,
}

impl Clone for AnswerQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            corpus: self.corpus.clone(),
            unmatched_log: self.unmatched_log.clone(),
            params: self.params.clone(),
        }
    }
}

impl AnswerQuestionUseCase {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            unmatched_log: Arc::new(NoUnmatchedLog),
            params: GenerationParams::default(),
        }
    }

    /// Create with an unmatched-question log.
    pub fn with_unmatched_log(mut self, log: Arc<dyn UnmatchedLog>) -> Self {
        self.unmatched_log = log;
        self
    }

    /// Create with custom generation parameters.
    pub fn with_generation_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn unmatched_log(&self) -> &Arc<dyn UnmatchedLog> {
        &self.unmatched_log
    }

    /// Answer a question. Always produces a reply.
    pub fn execute(&self, input: &AnswerInput, rng: &mut dyn RandomSource) -> AnswerOutput {
        info!(
            "Answering ({}, {}): {}",
            input.corpus_model,
            input.tier,
            truncate_str(input.query.raw(), 100)
        );

        let params = self.params.for_tier(input.tier);
        let entries = self.corpus.entries(&input.corpus_model);

        let output = if input.query.is_blank() || entries.is_empty() {
            None
        } else {
            match self.answer_exact(entries, input, params, rng) {
                Some(output) => Some(output),
                None => self.answer_fuzzy(entries, input, params, rng),
            }
        };

        let output = output.unwrap_or_else(|| self.answer_unmatched(input, params));
        debug!("Answer path: {}", output.path);
        output
    }

    fn answer_exact(
        &self,
        entries: &[QaEntry],
        input: &AnswerInput,
        params: &TierParams,
        rng: &mut dyn RandomSource,
    ) -> Option<AnswerOutput> {
        let matches = find_exact(entries, input.query.normalized());
        let selected = weighted_pick(&matches, &input.query.words(), rng)?;
        let answers = distinct_answers(&matches);
        debug!(
            "Exact match: {} entries, {} distinct answers",
            matches.len(),
            answers.len()
        );

        if answers.len() > 1 {
            let sources = std::iter::once(selected.answer.as_str())
                .chain(answers.into_iter().filter(|a| *a != selected.answer));
            let chain = MarkovChain::build(sources);
            let text = walk(
                &chain,
                selected.first_answer_word().as_deref(),
                params.exact_multi_length,
                rng,
            );
            return Some(AnswerOutput::new(text, AnswerPath::ExactMulti, input.tier));
        }

        match params.single_answer {
            Some(single) => {
                let chain = MarkovChain::build([selected.answer.as_str()]);
                let length = single.length_for(selected.answer_word_count());
                let text = walk(&chain, selected.first_answer_word().as_deref(), length, rng);
                let text = if text.is_empty() {
                    selected.answer.clone()
                } else {
                    text
                };
                Some(AnswerOutput::new(
                    text,
                    AnswerPath::ExactSingleGenerated,
                    input.tier,
                ))
            }
            None => Some(AnswerOutput::new(
                selected.answer.clone(),
                AnswerPath::ExactSingleVerbatim,
                input.tier,
            )),
        }
    }

    fn answer_fuzzy(
        &self,
        entries: &[QaEntry],
        input: &AnswerInput,
        params: &TierParams,
        rng: &mut dyn RandomSource,
    ) -> Option<AnswerOutput> {
        let fuzzy = find_fuzzy(entries, input.query.normalized());
        if !fuzzy.is_match() {
            return None;
        }

        let selected = weighted_pick(&fuzzy.candidates, &input.query.words(), rng)?;
        let answers = distinct_answers(&fuzzy.candidates);
        debug!(
            "Fuzzy match: score {:.3}, {} entries, {} distinct answers",
            fuzzy.best_score,
            fuzzy.candidates.len(),
            answers.len()
        );

        if answers.len() > 1 {
            let chain = MarkovChain::build(answers);
            let text = walk(
                &chain,
                selected.first_answer_word().as_deref(),
                params.fuzzy_length,
                rng,
            );
            Some(AnswerOutput::new(text, AnswerPath::FuzzyMulti, input.tier))
        } else {
            Some(AnswerOutput::new(
                selected.answer.clone(),
                AnswerPath::FuzzySingle,
                input.tier,
            ))
        }
    }

    fn answer_unmatched(&self, input: &AnswerInput, params: &TierParams) -> AnswerOutput {
        info!(
            "No match, recording question: {}",
            truncate_str(input.query.raw(), 100)
        );
        self.unmatched_log.append(input.query.raw());
        AnswerOutput::new(params.fallback.clone(), AnswerPath::NoMatch, input.tier)
    }
}
