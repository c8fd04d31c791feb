//! Gradual display: answers appear a few words at a time

use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const MIN_CHUNK: usize = 2;
const MAX_CHUNK: usize = 4;

/// Split `text` into chunks of 2 to 4 whitespace-separated words.
///
/// Only the last chunk may be shorter. Joining the chunks with single
/// spaces gives the words of `text` separated by single spaces.
pub fn chunk_words<R: Rng>(text: &str, rng: &mut R) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let size = rng.gen_range(MIN_CHUNK..=MAX_CHUNK).min(words.len() - i);
        chunks.push(words[i..i + size].join(" "));
        i += size;
    }
    chunks
}

/// Writes text chunk by chunk with a pause in between
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Write `text` to `out` gradually, ending with a newline
    pub fn write<W, R>(&self, out: &mut W, text: &str, rng: &mut R) -> io::Result<()>
    where
        W: Write + ?Sized,
        R: Rng,
    {
        for (i, chunk) in chunk_words(text, rng).iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
                if !self.delay.is_zero() {
                    thread::sleep(self.delay);
                }
            }
            write!(out, "{}", chunk)?;
            out.flush()?;
        }
        writeln!(out)
    }
}
