//! Bounded random walk over a [`MarkovChain`]

use super::chain::MarkovChain;
use crate::random::RandomSource;

/// Generate text by walking `chain`.
///
/// Starts at `start_word` when it is a key, otherwise at a uniformly random
/// key. Takes up to `max_length` steps, stopping early at a word with no
/// successors. The result includes the start word, so it holds at most
/// `max_length + 1` words. An empty chain yields an empty string.
pub fn walk(
    chain: &MarkovChain,
    start_word: Option<&str>,
    max_length: usize,
    rng: &mut dyn RandomSource,
) -> String {
    if chain.is_empty() {
        return String::new();
    }

    let mut word: &str = match start_word {
        Some(start) if chain.contains_key(start) => start,
        _ => {
            let keys = chain.keys();
            keys[rng.index(keys.len())].as_str()
        }
    };

    let mut out = vec![word];
    for _ in 0..max_length {
        let next = match chain.successors(word) {
            Some(successors) if !successors.is_empty() => {
                successors[rng.index(successors.len())].as_str()
            }
            _ => break,
        };
        word = next;
        out.push(word);
    }

    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_empty_chain_returns_empty() {
        let mut rng = ScriptedRandom::constant(0.3);
        assert_eq!(walk(&MarkovChain::new(), Some("a"), 10, &mut rng), "");
        assert_eq!(walk(&MarkovChain::new(), None, 10, &mut rng), "");
    }

    #[test]
    fn test_stops_after_dead_end() {
        let chain = MarkovChain::build(["a b c"]);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(walk(&chain, Some("b"), 10, &mut rng), "b c");
    }

    #[test]
    fn test_zero_length_returns_start_word() {
        let chain = MarkovChain::build(["a b c"]);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(walk(&chain, Some("a"), 0, &mut rng), "a");
    }

    #[test]
    fn test_follows_chain_to_dead_end() {
        let chain = MarkovChain::build(["hi there friend"]);
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(walk(&chain, Some("hi"), 50, &mut rng), "hi there friend");
    }

    #[test]
    fn test_length_cap_on_cycle() {
        let chain = MarkovChain::build(["a b a"]);
        let mut rng = ScriptedRandom::constant(0.0);
        let out = walk(&chain, Some("a"), 4, &mut rng);
        assert_eq!(out, "a b a b a");
        assert_eq!(out.split(' ').count(), 5);
    }

    #[test]
    fn test_unknown_start_picks_random_key() {
        let chain = MarkovChain::build(["x y", "p q"]);
        // keys are [x, p]; 0.6 * 2 -> index 1 -> "p"
        let mut rng = ScriptedRandom::constant(0.6);
        assert_eq!(walk(&chain, Some("zzz"), 5, &mut rng), "p q");

        let mut rng = ScriptedRandom::constant(0.1);
        assert_eq!(walk(&chain, None, 5, &mut rng), "x y");
    }

    #[test]
    fn test_successor_choice_uses_rng() {
        let chain = MarkovChain::build(["go left", "go right"]);
        let mut rng = ScriptedRandom::new(vec![0.9]);
        assert_eq!(walk(&chain, Some("go"), 3, &mut rng), "go right");
    }
}
