//! Exact and fuzzy matching of a query against corpus questions

use crate::core::question::words;
use crate::corpus::QaEntry;

/// Result of fuzzy matching: every entry sharing the best score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub candidates: Vec<&'a QaEntry>,
    pub best_score: f64,
}

impl FuzzyMatch<'_> {
    /// True when at least one question shares a word with the query
    pub fn is_match(&self) -> bool {
        self.best_score > 0.0 && !self.candidates.is_empty()
    }
}

/// Word-overlap similarity between a query and a question.
///
/// Counts the query words that occur anywhere in the question (membership,
/// not multiset intersection) and divides by the longer word count.
///
/// ```
/// use chainbot_domain::matching::similarity;
///
/// assert_eq!(similarity("dogs are great", "cats are great"), 2.0 / 3.0);
/// assert_eq!(similarity("hello", "hello"), 1.0);
/// ```
pub fn similarity(query: &str, question: &str) -> f64 {
    let query_words = words(query);
    let question_words = words(question);
    let shared = query_words
        .iter()
        .filter(|w| question_words.contains(w))
        .count();
    let denominator = query_words.len().max(question_words.len()).max(1);
    shared as f64 / denominator as f64
}

/// Entries whose lowercased question equals the normalized query
pub fn find_exact<'a>(entries: &'a [QaEntry], normalized_query: &str) -> Vec<&'a QaEntry> {
    entries
        .iter()
        .filter(|entry| entry.question_lower() == normalized_query)
        .collect()
}

/// Entries sharing the highest similarity score with the query.
///
/// When nothing overlaps (best score 0, empty corpus, blank query) the
/// candidate list is empty.
pub fn find_fuzzy<'a>(entries: &'a [QaEntry], normalized_query: &str) -> FuzzyMatch<'a> {
    let scored: Vec<(&QaEntry, f64)> = entries
        .iter()
        .map(|entry| (entry, similarity(normalized_query, &entry.question)))
        .collect();

    let best_score = scored.iter().map(|(_, s)| *s).fold(0.0, f64::max);
    if best_score <= 0.0 {
        return FuzzyMatch {
            candidates: Vec::new(),
            best_score: 0.0,
        };
    }

    let candidates = scored
        .into_iter()
        .filter(|(_, score)| *score == best_score)
        .map(|(entry, _)| entry)
        .collect();

    FuzzyMatch {
        candidates,
        best_score,
    }
}

/// Distinct answers among `entries`, in first-seen order
pub fn distinct_answers<'a>(entries: &[&'a QaEntry]) -> Vec<&'a str> {
    let mut answers: Vec<&str> = Vec::new();
    for entry in entries {
        if !answers.contains(&entry.answer.as_str()) {
            answers.push(&entry.answer);
        }
    }
    answers
}
