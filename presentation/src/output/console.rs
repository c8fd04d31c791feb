//! Console output formatter for answers

use chainbot_application::AnswerOutput;
use chainbot_domain::{ModelId, ModelTier};
use colored::Colorize;
use serde::Serialize;

/// JSON shape of one answered question
#[derive(Debug, Serialize)]
struct AnswerRecord<'a> {
    question: &'a str,
    model: &'a ModelId,
    #[serde(flatten)]
    answer: &'a AnswerOutput,
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Disable ANSI colors for the rest of the process
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Speaker label printed before an answer, e.g. `GPT-5o:`
    pub fn answer_prefix(model: &ModelId) -> String {
        format!("{}", format!("{}:", model).cyan().bold())
    }

    /// Format a complete answer on one line
    pub fn format_answer(output: &AnswerOutput, model: &ModelId) -> String {
        format!("{} {}", Self::answer_prefix(model), output.text)
    }

    /// Format as JSON
    pub fn format_json(question: &str, output: &AnswerOutput, model: &ModelId) -> String {
        let record = AnswerRecord {
            question,
            model,
            answer: output,
        };
        serde_json::to_string_pretty(&record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the recorded unanswered questions
    pub fn format_unmatched(entries: &[String]) -> String {
        if entries.is_empty() {
            return format!("{}\n", "No unanswered questions recorded.".dimmed());
        }

        let mut output = format!(
            "{}\n",
            format!("Unanswered questions ({}):", entries.len()).cyan().bold()
        );
        for (i, question) in entries.iter().enumerate() {
            output.push_str(&format!("  {:>3}. {}\n", i + 1, question));
        }
        output
    }

    /// One-line session summary: model and tier
    pub fn format_session(model: &ModelId, tier: ModelTier) -> String {
        let tier_label = match tier {
            ModelTier::Premium => tier.as_str().green().bold(),
            ModelTier::Economy => tier.as_str().yellow().bold(),
        };
        format!("{} {} ({})", "Model:".dimmed(), model, tier_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainbot_application::{AnswerInput, AnswerPath, AnswerQuestionUseCase};
    use chainbot_domain::{Corpus, QaEntry, ScriptedRandom};
    use std::sync::Arc;

    fn sample_output() -> AnswerOutput {
        let corpus = Corpus::single("GPT-5o", vec![QaEntry::new("hi", "hello there")]);
        let use_case = AnswerQuestionUseCase::new(Arc::new(corpus));
        let input = AnswerInput::new("hi", ModelTier::Economy);
        use_case.execute(&input, &mut ScriptedRandom::constant(0.0))
    }

    #[test]
    fn test_format_answer_contains_text() {
        colored::control::set_override(false);
        let output = sample_output();
        let text = ConsoleFormatter::format_answer(&output, &ModelId::Gpt5oMini);
        assert_eq!(text, "GPT-5o-mini: hello there");
    }

    #[test]
    fn test_format_json_fields() {
        let output = sample_output();
        assert_eq!(output.path, AnswerPath::ExactSingleVerbatim);

        let json = ConsoleFormatter::format_json("hi", &output, &ModelId::Gpt5oMini);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["question"], "hi");
        assert_eq!(value["model"], "GPT-5o-mini");
        assert_eq!(value["text"], "hello there");
        assert_eq!(value["path"], "exact_single_verbatim");
        assert_eq!(value["tier"], "economy");
    }

    #[test]
    fn test_format_unmatched() {
        colored::control::set_override(false);
        let empty = ConsoleFormatter::format_unmatched(&[]);
        assert!(empty.contains("No unanswered"));

        let list = ConsoleFormatter::format_unmatched(&["foo".to_string(), "bar".to_string()]);
        assert!(list.contains("(2)"));
        assert!(list.contains("1. foo"));
        assert!(list.contains("2. bar"));
    }
}
