//! Corpus loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a corpus file
#[derive(Error, Debug)]
pub enum CorpusLoadError {
    #[error("Could not read corpus file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse corpus file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CorpusLoadError>;
