//! CLI entrypoint for chainbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chainbot_application::{
    AnswerInput, AnswerQuestionUseCase, CorpusLoaderPort, InMemoryUnmatchedLog, UnmatchedLog,
};
use chainbot_domain::{ConfigIssue, ModelId, ModelTier, Query, Severity};
use chainbot_infrastructure::{
    ConfigLoader, FileConfig, JsonCorpusLoader, JsonlUnmatchedLog, RngRandomSource,
};
use chainbot_presentation::{
    AnswerPresenter, ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting chainbot");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config.validate())?;

    let model = match &cli.model {
        Some(label) => ModelId::from(label.as_str()),
        None => config.session.model(),
    };
    let tier = resolve_tier(&cli, &config, &model);
    let corpus_model = cli
        .corpus_model
        .clone()
        .unwrap_or_else(|| config.corpus.model.clone());

    // === Unmatched log ===
    let persist = config.unmatched.persist && !cli.no_persist;
    let unmatched_path = cli
        .unmatched_log
        .clone()
        .unwrap_or_else(|| config.unmatched.path());

    if cli.show_unmatched {
        let entries = if unmatched_path.exists() {
            JsonlUnmatchedLog::read_entries(&unmatched_path).with_context(|| {
                format!("Failed to read unmatched log {}", unmatched_path.display())
            })?
        } else {
            Vec::new()
        };
        ConsoleFormatter::set_color(config.output.color);
        print!("{}", ConsoleFormatter::format_unmatched(&entries));
        return Ok(());
    }

    let unmatched_log = open_unmatched_log(persist, unmatched_path)?;

    // === Corpus ===
    let corpus_path = cli.corpus.clone().unwrap_or_else(|| config.corpus.path());
    let corpus = JsonCorpusLoader::new(&corpus_path)
        .load()
        .with_context(|| format!("Failed to load corpus {}", corpus_path.display()))?;
    info!(
        "Loaded corpus from {} ({} entries for {})",
        corpus_path.display(),
        corpus.entries(&corpus_model).len(),
        corpus_model
    );

    // === Dependency Injection ===
    let use_case = AnswerQuestionUseCase::new(Arc::new(corpus))
        .with_unmatched_log(unmatched_log)
        .with_generation_params(config.generation.to_generation_params());

    let output_config = output_config(&cli, &config);
    ConsoleFormatter::set_color(output_config.color);
    let presenter = AnswerPresenter::new(output_config);
    let mut rng = RngRandomSource::from_seed_option(cli.seed);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_path(),
        };
        let mut repl = ChatRepl::new(use_case, presenter, model)
            .with_tier(tier)
            .with_corpus_model(corpus_model)
            .with_config(repl_config);

        repl.run(&mut rng)?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let input = AnswerInput::new(Query::new(question.as_str()), tier).with_corpus_model(corpus_model);
    let output = use_case.execute(&input, &mut rng);
    presenter.present(&question, &output, &model)?;

    Ok(())
}

/// Log every issue; fail on errors
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => tracing::error!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// `--tier` wins, then the tier implied by `--model`, then `[session]`
fn resolve_tier(cli: &Cli, config: &FileConfig, model: &ModelId) -> ModelTier {
    if let Some(value) = &cli.tier {
        let (tier, fell_back) = ModelTier::parse_lenient(Some(value));
        if fell_back {
            warn!("Unknown tier '{}', falling back to '{}'", value, tier);
        }
        return tier;
    }
    if cli.model.is_some() {
        return model.tier();
    }
    config.session.resolve_tier().0
}

fn open_unmatched_log(persist: bool, path: PathBuf) -> Result<Arc<dyn UnmatchedLog>> {
    if !persist {
        info!("Unmatched questions kept in memory only");
        return Ok(Arc::new(InMemoryUnmatchedLog::new()));
    }
    let log = JsonlUnmatchedLog::open(&path)
        .with_context(|| format!("Failed to open unmatched log {}", path.display()))?;
    info!("Recording unmatched questions to {}", path.display());
    Ok(Arc::new(log))
}

fn output_config(cli: &Cli, config: &FileConfig) -> OutputConfig {
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    OutputConfig {
        format,
        color: config.output.color,
        typing: config.output.typing && !cli.no_typing,
        typing_delay: Duration::from_millis(config.output.typing_delay_ms),
        quiet: cli.quiet,
    }
}
