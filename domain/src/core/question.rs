//! Query value object

use serde::{Deserialize, Serialize};

/// A user question as submitted (Value Object)
///
/// Keeps the raw text, which is what gets recorded when nothing
/// matches, next to the normalized form used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Create a new query. Blank queries are allowed; they never match.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Text exactly as the user typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lowercased text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Lowercased whitespace-separated words of the query
    pub fn words(&self) -> Vec<&str> {
        self.normalized.split_whitespace().collect()
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}

/// Trim and lowercase text for comparison
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split text on whitespace runs, lowercasing each word
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_normalizes() {
        let q = Query::new("  Hello World ");
        assert_eq!(q.raw(), "  Hello World ");
        assert_eq!(q.normalized(), "hello world");
        assert_eq!(q.words(), vec!["hello", "world"]);
    }

    #[test]
    fn test_blank_query() {
        assert!(Query::new("   ").is_blank());
        assert!(Query::new("\t\n").is_blank());
        assert!(!Query::new("hi").is_blank());
    }

    #[test]
    fn test_words_drops_empty_tokens() {
        assert_eq!(words("  A  b\tC "), vec!["a", "b", "c"]);
        assert!(words("").is_empty());
    }
}
