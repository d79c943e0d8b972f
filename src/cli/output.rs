//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners,
//! status lines, and errors to the user.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

/// Output settings derived from the global CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Verbosity count (`-v`, `-vv`)
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Default tracing level for this verbosity
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Print a status line unless quiet
    pub fn status(&self, prefix: &str, message: &str) {
        if !self.quiet {
            println!("{prefix} {message}");
        }
    }

    /// Spinner for an operation of unknown duration, hidden when quiet
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner(message)
        }
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
