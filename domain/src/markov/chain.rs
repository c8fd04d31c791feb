//! Word-level Markov chain

use std::collections::HashMap;

/// Word transition table: lowercase word to the lowercase words observed
/// right after it, duplicates kept so frequent successors are favoured.
///
/// # Invariants
/// - Every key occurred as a non-final token of some source text
/// - Built from no text (or only empty texts) the chain is empty
/// - Keys remember insertion order, so a random key draw is reproducible
///   for a given random source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkovChain {
    transitions: HashMap<String, Vec<String>>,
    keys: Vec<String>,
}

impl MarkovChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from source texts, processed in order.
    ///
    /// ```
    /// use chainbot_domain::markov::MarkovChain;
    ///
    /// let chain = MarkovChain::build(["a b c", "a b d"]);
    /// assert_eq!(chain.successors("a"), Some(&["b".to_string(), "b".to_string()][..]));
    /// assert_eq!(chain.successors("b"), Some(&["c".to_string(), "d".to_string()][..]));
    /// ```
    pub fn build<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chain = Self::new();
        for text in texts {
            chain.train(text.as_ref());
        }
        chain
    }

    /// Add the transitions of one text. Empty and single-word texts add nothing.
    pub fn train(&mut self, text: &str) {
        let words: Vec<&str> = text.split_whitespace().collect();
        for pair in words.windows(2) {
            if let [current, next] = pair {
                self.push(current.to_lowercase(), next.to_lowercase());
            }
        }
    }

    fn push(&mut self, word: String, next: String) {
        match self.transitions.get_mut(&word) {
            Some(successors) => successors.push(next),
            None => {
                self.keys.push(word.clone());
                self.transitions.insert(word, vec![next]);
            }
        }
    }

    /// Observed successors of `word`, if it is a key
    pub fn successors(&self, word: &str) -> Option<&[String]> {
        self.transitions.get(word).map(Vec::as_slice)
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.transitions.contains_key(word)
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_two_texts() {
        let chain = MarkovChain::build(["a b c", "a b d"]);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.successors("a").unwrap(), words(&["b", "b"]).as_slice());
        assert_eq!(chain.successors("b").unwrap(), words(&["c", "d"]).as_slice());
        assert!(chain.successors("c").is_none());
        assert_eq!(chain.keys(), words(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_build_empty_inputs() {
        assert!(MarkovChain::build(Vec::<String>::new()).is_empty());
        assert!(MarkovChain::build([""]).is_empty());
        assert!(MarkovChain::build(["   "]).is_empty());
    }

    #[test]
    fn test_single_word_text_adds_nothing() {
        assert!(MarkovChain::build(["hello"]).is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_whitespace_runs() {
        let chain = MarkovChain::build(["Hi  There\tFriend"]);
        assert_eq!(chain.successors("hi").unwrap(), words(&["there"]).as_slice());
        assert_eq!(
            chain.successors("there").unwrap(),
            words(&["friend"]).as_slice()
        );
        assert!(!chain.contains_key("Hi"));
    }
}
