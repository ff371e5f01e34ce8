//! User interface module - printing workflow results.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing to stdout and stderr

pub mod formatter;

use crate::boundary::PublishWarning;
use crate::cli::orchestration::{WorkflowOutcome, WorkflowResult};

pub use formatter::{format_error, format_info, format_warning};

/// Print a warning line to stderr.
pub fn display_warning(warning: &PublishWarning) {
    eprintln!("{}", format_warning(&warning.to_string()));
}

/// Print an error line to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Lines to print on stdout for a workflow result.
///
/// `raw` prints only the relevant version: the current one for a query,
/// the new one for a bump.
pub fn result_lines(result: &WorkflowResult, raw: bool) -> Vec<String> {
    match (&result.outcome, raw) {
        (WorkflowOutcome::Current(version), true) => vec![version.to_string()],
        (WorkflowOutcome::Current(version), false) => vec![format_info(
            &formatter::current_version_message(&version.to_string()),
        )],
        (WorkflowOutcome::Bumped(bump), true) => vec![bump.new_version.to_string()],
        (WorkflowOutcome::Bumped(bump), false) => vec![
            format_info(&formatter::current_version_message(
                &bump.current_version.to_string(),
            )),
            format_info(&formatter::new_version_message(&bump.new_version.to_string())),
        ],
    }
}

/// Print a workflow result: version lines to stdout, warnings to stderr.
pub fn display_result(result: &WorkflowResult, raw: bool) {
    for line in result_lines(result, raw) {
        println!("{}", line);
    }
    for warning in &result.warnings {
        display_warning(warning);
    }
}
