//! Overlap-weighted random selection among matching entries

use crate::corpus::QaEntry;
use crate::random::RandomSource;

/// Selection weight of a candidate: one plus the number of query words
/// found as substrings of its lowercased question.
pub fn candidate_weight(candidate: &QaEntry, query_words: &[&str]) -> usize {
    let question = candidate.question_lower();
    1 + query_words
        .iter()
        .filter(|w| question.contains(**w))
        .count()
}

/// Pick one candidate with probability proportional to its weight.
///
/// A single candidate is returned without consuming randomness.
/// Returns `None` only for an empty candidate list.
pub fn weighted_pick<'a>(
    candidates: &[&'a QaEntry],
    query_words: &[&str],
    rng: &mut dyn RandomSource,
) -> Option<&'a QaEntry> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        _ => {
            let weights: Vec<usize> = candidates
                .iter()
                .map(|c| candidate_weight(c, query_words))
                .collect();
            let total: usize = weights.iter().sum();

            let mut remainder = rng.next_f64() * total as f64;
            for (candidate, weight) in candidates.iter().zip(&weights) {
                remainder -= *weight as f64;
                if remainder <= 0.0 {
                    return Some(*candidate);
                }
            }
            candidates.first().copied()
        }
    }
}
