//! Pure formatting functions for UI output.
//!
//! Every line starts with a fixed tag (`info`, `warning`, `error`).
//! Colours come from `console` and switch themselves off when the stream
//! is not a terminal, so piped output is plain text.

use console::style;

/// An `info` line for standard output.
pub fn format_info(message: &str) -> String {
    format!("{} {}", style("info").green(), message)
}

/// A `warning` line for standard error.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("warning").yellow().for_stderr(), message)
}

/// An `error` line for standard error.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error").red().for_stderr(), message)
}

pub fn current_version_message(version: &str) -> String {
    format!("Current version is {}", version)
}

pub fn new_version_message(version: &str) -> String {
    format!("New version is {}", version)
}
