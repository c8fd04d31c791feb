//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer text, printed gradually
    Text,
    /// JSON object with the answer and the match path
    Json,
}

impl From<OutputFormat> for chainbot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => chainbot_domain::OutputFormat::Text,
            OutputFormat::Json => chainbot_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for chainbot
#[derive(Parser, Debug)]
#[command(name = "chainbot")]
#[command(author, version, about = "Corpus chatbot - answers by blending stored answers through a Markov chain")]
#[command(long_about = r#"
Chainbot answers questions from a fixed question/answer corpus.

A question is matched against the corpus in order:
1. Exact match: the stored answers are blended through a word-level Markov chain
2. Fuzzy match: the answers of the closest questions are blended the same way
3. No match: the question is logged and a fallback message is returned

The model label picks the tier: GPT-5o is premium (longer answers),
everything else is economy.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chainbot.toml     Project-level config
3. ~/.config/chainbot/config.toml   Global config

Example:
  chainbot "what is rust"
  chainbot -m GPT-5o-mini "how do I sort a vector"
  chainbot --chat --seed 42
"#)]
pub struct Cli {
    /// The question to answer (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model label; GPT-5o is premium, others economy [default: GPT-5o]
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Tier override (premium or economy)
    #[arg(long, value_name = "TIER")]
    pub tier: Option<String>,

    /// Path to the corpus JSON file
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Key of the corpus inside the JSON document
    #[arg(long, value_name = "NAME")]
    pub corpus_model: Option<String>,

    /// File that records unanswered questions
    #[arg(long, value_name = "PATH")]
    pub unmatched_log: Option<PathBuf>,

    /// Keep unanswered questions in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Seed for reproducible answers
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print answers at once instead of a few words at a time
    #[arg(long)]
    pub no_typing: bool,

    /// Print recorded unanswered questions and exit
    #[arg(long)]
    pub show_unmatched: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
