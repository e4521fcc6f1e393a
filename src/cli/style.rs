//! Terminal styling helpers
//!
//! Colors are always emitted; `anstream` strips them when the stream is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// Cross used in failure lines
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize: Display {
    /// De-emphasized hint text
    fn muted(&self) -> String {
        self.to_string().dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.to_string().bold().to_string()
    }

    /// Names and values worth spotting
    fn accent(&self) -> String {
        self.to_string().cyan().to_string()
    }

    /// Successful outcomes
    fn success(&self) -> String {
        self.to_string().green().to_string()
    }

    /// Problems that did not abort the command
    fn warn(&self) -> String {
        self.to_string().yellow().to_string()
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Yellow cross
pub fn cross() -> String {
    CROSS.warn()
}
