//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::presenter::AnswerPresenter;
use chainbot_application::{AnswerInput, AnswerQuestionUseCase};
use chainbot_domain::{ModelId, ModelTier, Query, RandomSource};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;

const HISTORY_CAPACITY: usize = 1000;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Switch the model label; `None` lists the known labels
    Model(Option<String>),
    /// Override the tier; `None` shows the current one
    Tier(Option<String>),
    Unmatched,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary questions.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        Some(match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "model" | "m" => ReplCommand::Model(arg),
            "tier" | "t" => ReplCommand::Tier(arg),
            "unmatched" | "u" => ReplCommand::Unmatched,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        })
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: AnswerQuestionUseCase,
    presenter: AnswerPresenter,
    config: ReplConfig,
    corpus_model: String,
    model: ModelId,
    tier: ModelTier,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AnswerQuestionUseCase, presenter: AnswerPresenter, model: ModelId) -> Self {
        let tier = model.tier();
        Self {
            use_case,
            presenter,
            config: ReplConfig::default(),
            corpus_model: ModelId::default().as_str().to_string(),
            model,
            tier,
        }
    }

    pub fn with_tier(mut self, tier: ModelTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_corpus_model(mut self, corpus_model: impl Into<String>) -> Self {
        self.corpus_model = corpus_model.into();
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn tier(&self) -> ModelTier {
        self.tier
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(_) => editor,
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self, rng: &mut dyn RandomSource) -> io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("chainbot".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line, rng)?;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                // Ctrl-D
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Chainbot - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::format_session(&self.model, self.tier));
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /model [MODEL]     - Switch model (lists models without argument)");
        println!("  /tier [TIER]       - Override tier: premium or economy");
        println!("  /unmatched         - Show questions the bot could not answer");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    pub fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Model(None) => {
                println!();
                println!("Available models:");
                for model in ModelId::known_models() {
                    let marker = if model == self.model { "*" } else { " " };
                    println!("  {} {} ({})", marker, model, model.tier());
                }
                println!();
            }
            ReplCommand::Model(Some(label)) => {
                self.model = ModelId::from(label.as_str());
                self.tier = self.model.tier();
                println!("{}", ConsoleFormatter::format_session(&self.model, self.tier));
            }
            ReplCommand::Tier(None) => {
                println!("{}", ConsoleFormatter::format_session(&self.model, self.tier));
            }
            ReplCommand::Tier(Some(value)) => match value.parse::<ModelTier>() {
                Ok(tier) => {
                    self.tier = tier;
                    println!("{}", ConsoleFormatter::format_session(&self.model, self.tier));
                }
                Err(e) => {
                    println!("{}", e);
                    println!("Valid tiers: premium, economy");
                }
            },
            ReplCommand::Unmatched => {
                let entries = self.use_case.unmatched_log().entries();
                print!("{}", ConsoleFormatter::format_unmatched(&entries));
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn process_question(&self, question: &str, rng: &mut dyn RandomSource) -> io::Result<()> {
        println!();

        let input = AnswerInput::new(Query::new(question), self.tier)
            .with_corpus_model(self.corpus_model.clone());
        let output = self.use_case.execute(&input, rng);
        self.presenter.present(question, &output, &self.model)?;

        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use chainbot_application::InMemoryUnmatchedLog;
    use chainbot_domain::Corpus;
    use std::sync::Arc;

    fn repl(model: ModelId) -> ChatRepl {
        let use_case = AnswerQuestionUseCase::new(Arc::new(Corpus::new()))
            .with_unmatched_log(Arc::new(InMemoryUnmatchedLog::new()));
        ChatRepl::new(use_case, AnswerPresenter::new(OutputConfig::default()), model)
    }

    #[test]
    fn test_parse_plain_question() {
        assert_eq!(ReplCommand::parse("what is rust"), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("  /q "), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/model"), Some(ReplCommand::Model(None)));
        assert_eq!(
            ReplCommand::parse("/model  GPT-5o-mini "),
            Some(ReplCommand::Model(Some("GPT-5o-mini".to_string())))
        );
        assert_eq!(
            ReplCommand::parse("/tier premium"),
            Some(ReplCommand::Tier(Some("premium".to_string())))
        );
        assert_eq!(ReplCommand::parse("/unmatched"), Some(ReplCommand::Unmatched));
        assert_eq!(
            ReplCommand::parse("/nope"),
            Some(ReplCommand::Unknown("/nope".to_string()))
        );
    }

    #[test]
    fn test_initial_tier_follows_model() {
        assert_eq!(repl(ModelId::Gpt5o).tier(), ModelTier::Premium);
        assert_eq!(repl(ModelId::Gpt5oMini).tier(), ModelTier::Economy);
        assert_eq!(
            repl(ModelId::Gpt5oMini).with_tier(ModelTier::Premium).tier(),
            ModelTier::Premium
        );
    }

    #[test]
    fn test_model_command_switches_tier() {
        let mut repl = repl(ModelId::Gpt5o);
        assert!(!repl.handle_command(ReplCommand::Model(Some("GPT-5o-mini".to_string()))));
        assert_eq!(repl.model(), &ModelId::Gpt5oMini);
        assert_eq!(repl.tier(), ModelTier::Economy);
    }

    #[test]
    fn test_tier_command() {
        let mut repl = repl(ModelId::Gpt5oMini);
        repl.handle_command(ReplCommand::Tier(Some("PREMIUM".to_string())));
        assert_eq!(repl.tier(), ModelTier::Premium);

        // unknown values leave the tier unchanged
        repl.handle_command(ReplCommand::Tier(Some("gold".to_string())));
        assert_eq!(repl.tier(), ModelTier::Premium);
    }

    #[test]
    fn test_quit_exits() {
        let mut repl = repl(ModelId::Gpt5o);
        assert!(repl.handle_command(ReplCommand::Quit));
        assert!(!repl.handle_command(ReplCommand::Help));
        assert!(!repl.handle_command(ReplCommand::Unmatched));
    }
}
