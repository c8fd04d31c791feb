//! Writes answers to the terminal according to the output configuration

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::typewriter::Typewriter;
use crate::progress::typing::{TYPING_PAUSE, TypingIndicator};
use chainbot_application::AnswerOutput;
use chainbot_domain::{ModelId, OutputFormat};
use std::io::{self, Write};

/// Presents one answer: JSON, plain text, or typed out gradually
#[derive(Debug, Clone)]
pub struct AnswerPresenter {
    config: OutputConfig,
}

impl AnswerPresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Print `output` to stdout
    pub fn present(&self, question: &str, output: &AnswerOutput, model: &ModelId) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.config.format == OutputFormat::Json {
            return writeln!(out, "{}", ConsoleFormatter::format_json(question, output, model));
        }

        if !self.config.gradual() {
            return writeln!(out, "{}", ConsoleFormatter::format_answer(output, model));
        }

        let indicator = if self.config.quiet {
            TypingIndicator::hidden()
        } else {
            TypingIndicator::start(model.as_str())
        };
        indicator.hold(TYPING_PAUSE);
        indicator.finish();

        write!(out, "{} ", ConsoleFormatter::answer_prefix(model))?;
        Typewriter::new(self.config.typing_delay).write(&mut out, &output.text, &mut rand::thread_rng())
    }
}
