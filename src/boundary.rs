use std::fmt;

/// Warnings raised after the records were written.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// Staging, committing or tagging the bump failed
    GitExecutionFailed { label: String, reason: String },
}

impl PublishWarning {
    /// Underlying cause, for logs
    pub fn reason(&self) -> &str {
        match self {
            PublishWarning::GitExecutionFailed { reason, .. } => reason,
        }
    }
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::GitExecutionFailed { .. } => write!(f, "git execution failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_warning_display() {
        let warning = PublishWarning::GitExecutionFailed {
            label: "v0.4.0-3".to_string(),
            reason: "could not find repository".to_string(),
        };
        assert_eq!(warning.to_string(), "git execution failed");
        assert_eq!(warning.reason(), "could not find repository");
    }
}
