//! JSONL file sink for unmatched questions.
//!
//! Each question is written as a single JSON line with a `type` field and
//! `timestamp`, appended to the file via a buffered writer. Existing lines
//! are kept, so the log grows across runs.

use chainbot_application::UnmatchedLog;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

const EVENT_TYPE: &str = "unmatched_question";

/// Errors opening or reading the unmatched-question log
#[derive(Error, Debug)]
pub enum UnmatchedLogError {
    #[error("Could not open unmatched log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in unmatched log: {source}")]
    Serialize {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Unmatched-question log that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
/// Questions that could not be written are kept in memory and still
/// reported by [`UnmatchedLog::entries`].
pub struct JsonlUnmatchedLog {
    writer: Mutex<BufWriter<File>>,
    unwritten: Mutex<Vec<String>>,
    path: PathBuf,
}

impl JsonlUnmatchedLog {
    /// Open the log for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UnmatchedLogError> {
        let path = path.as_ref();
        let io_err = |source| UnmatchedLogError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            unwritten: Mutex::new(Vec::new()),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the recorded questions from a log file, oldest first.
    ///
    /// Blank lines and records of other types are ignored.
    pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<String>, UnmatchedLogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| UnmatchedLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut questions = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| UnmatchedLogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: serde_json::Value =
                serde_json::from_str(&line).map_err(|source| UnmatchedLogError::Serialize {
                    line: index + 1,
                    source,
                })?;
            if record["type"] == EVENT_TYPE
                && let Some(question) = record["question"].as_str()
            {
                questions.push(question.to_string());
            }
        }
        Ok(questions)
    }
}

/// Result of writing one record line
#[derive(Debug)]
enum LineWrite {
    Written,
    /// Accepted by the writer, flush failed
    Buffered(io::Error),
    /// Not accepted by the writer
    Lost(io::Error),
}

fn write_line<W: Write + ?Sized>(writer: &mut W, line: &str) -> LineWrite {
    if let Err(e) = writeln!(writer, "{}", line) {
        return LineWrite::Lost(e);
    }
    match writer.flush() {
        Ok(()) => LineWrite::Written,
        Err(e) => LineWrite::Buffered(e),
    }
}

impl UnmatchedLog for JsonlUnmatchedLog {
    fn append(&self, question: &str) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = serde_json::json!({
            "type": EVENT_TYPE,
            "timestamp": timestamp,
            "question": question,
        });

        let outcome = match self.writer.lock() {
            Ok(mut writer) => write_line(&mut *writer, &record.to_string()),
            Err(_) => LineWrite::Lost(io::Error::other("unmatched log writer poisoned")),
        };

        match outcome {
            LineWrite::Written => {}
            // The line stays in the buffer and reaches the file on a later flush
            LineWrite::Buffered(e) => warn!(
                "Could not flush unmatched log {}: {}",
                self.path.display(),
                e
            ),
            LineWrite::Lost(e) => {
                warn!(
                    "Could not write to unmatched log {}: {}",
                    self.path.display(),
                    e
                );
                if let Ok(mut unwritten) = self.unwritten.lock() {
                    unwritten.push(question.to_string());
                }
            }
        }
    }

    fn entries(&self) -> Vec<String> {
        // Hold the writer lock so a concurrent append is not half-read
        let Ok(mut writer) = self.writer.lock() else {
            return Vec::new();
        };
        let _ = writer.flush();
        let mut entries = Self::read_entries(&self.path).unwrap_or_else(|e| {
            warn!("Could not read unmatched log: {}", e);
            Vec::new()
        });
        if let Ok(unwritten) = self.unwritten.lock() {
            entries.extend(unwritten.iter().cloned());
        }
        entries
    }
}

impl Drop for JsonlUnmatchedLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
