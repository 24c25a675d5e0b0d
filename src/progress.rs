//! Spinner display for long-running external calls

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while waiting on the LLM endpoint, registry or npm
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start a spinner with the given message
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Swap the message while keeping the spinner running
    pub fn update(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Stop and erase the spinner line
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}
