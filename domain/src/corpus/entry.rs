//! Question/answer pair entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single question/answer pair from the corpus
///
/// Entries are immutable once loaded. Several entries may share a
/// question (ambiguous questions) or an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Lowercased question text, as compared by the matcher
    pub fn question_lower(&self) -> String {
        self.question.to_lowercase()
    }

    /// First word of the answer, lowercased. Generation starts here.
    pub fn first_answer_word(&self) -> Option<String> {
        self.answer.split_whitespace().next().map(str::to_lowercase)
    }

    /// Number of whitespace-separated words in the answer
    pub fn answer_word_count(&self) -> usize {
        self.answer.split_whitespace().count()
    }
}

/// Corpus record as found on disk, where either field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQaEntry {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl TryFrom<RawQaEntry> for QaEntry {
    type Error = DomainError;

    fn try_from(raw: RawQaEntry) -> Result<Self, Self::Error> {
        let question = raw
            .question
            .ok_or(DomainError::MalformedEntry { missing: "question" })?;
        let answer = raw
            .answer
            .ok_or(DomainError::MalformedEntry { missing: "answer" })?;
        Ok(QaEntry { question, answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_answer_word() {
        let entry = QaEntry::new("hello", "  Hi there friend");
        assert_eq!(entry.first_answer_word().as_deref(), Some("hi"));
        assert_eq!(entry.answer_word_count(), 3);
        assert_eq!(QaEntry::new("q", "").first_answer_word(), None);
    }

    #[test]
    fn test_raw_entry_conversion() {
        let raw: RawQaEntry =
            serde_json::from_str(r#"{"question": "hello", "answer": "hi"}"#).unwrap();
        let entry = QaEntry::try_from(raw).unwrap();
        assert_eq!(entry, QaEntry::new("hello", "hi"));
    }

    #[test]
    fn test_raw_entry_missing_answer() {
        let raw: RawQaEntry = serde_json::from_str(r#"{"question": "hello"}"#).unwrap();
        assert_eq!(
            QaEntry::try_from(raw),
            Err(DomainError::MalformedEntry { missing: "answer" })
        );
    }

    #[test]
    fn test_raw_entry_missing_question() {
        let raw: RawQaEntry = serde_json::from_str(r#"{"answer": "hi"}"#).unwrap();
        assert_eq!(
            QaEntry::try_from(raw),
            Err(DomainError::MalformedEntry { missing: "question" })
        );
    }
}
