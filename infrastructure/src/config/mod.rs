//! Configuration file loading for chainbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHAINBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./chainbot.toml` or `./.chainbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/chainbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCorpusConfig, FileGenerationConfig, FileOutputConfig, FileReplConfig,
    FileSessionConfig, FileTierConfig, FileUnmatchedConfig,
};
pub use loader::ConfigLoader;
