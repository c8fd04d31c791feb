//! "Typing" spinner shown before an answer appears

use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// How long the indicator runs before the answer is printed
pub const TYPING_PAUSE: Duration = Duration::from_millis(700);

/// Spinner with a "<model> is typing" message
pub struct TypingIndicator {
    bar: ProgressBar,
}

impl TypingIndicator {
    /// Start a visible spinner on stderr
    pub fn start(speaker: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(format!("{} is typing", speaker));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// An indicator that draws nothing (quiet mode, JSON output)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&[".  ", ".. ", "...", " ..", "  .", "   "])
    }

    /// Keep the spinner running for `pause`
    pub fn hold(&self, pause: Duration) {
        if !self.bar.is_hidden() && !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
