use crate::error::{Result, VersionizeError};
use crate::git::Vcs;
use std::cell::RefCell;
use std::path::PathBuf;

/// A call received by [MockVcs]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Stage(Vec<PathBuf>),
    Commit(String),
    Tag(String),
}

/// Mock version control for testing without a repository
#[derive(Debug, Default)]
pub struct MockVcs {
    calls: RefCell<Vec<VcsCall>>,
    fail_on: Option<&'static str>,
}

impl MockVcs {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockVcs::default()
    }

    /// Create a mock that fails on the named operation
    /// (`"stage"`, `"commit"` or `"tag"`)
    pub fn failing_on(operation: &'static str) -> Self {
        MockVcs {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(operation),
        }
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &str, call: VcsCall) -> Result<()> {
        if self.fail_on == Some(operation) {
            return Err(VersionizeError::vcs(format!("{} failed", operation)));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Vcs for MockVcs {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        self.record("stage", VcsCall::Stage(paths.to_vec()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", VcsCall::Commit(message.to_string()))
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.record("tag", VcsCall::Tag(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls() {
        let vcs = MockVcs::new();
        vcs.stage(&[PathBuf::from("package.json")]).unwrap();
        vcs.commit("v1.0.0").unwrap();
        vcs.tag("v1.0.0").unwrap();

        assert_eq!(
            vcs.calls(),
            vec![
                VcsCall::Stage(vec![PathBuf::from("package.json")]),
                VcsCall::Commit("v1.0.0".to_string()),
                VcsCall::Tag("v1.0.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_mock_failure() {
        let vcs = MockVcs::failing_on("commit");
        assert!(vcs.stage(&[]).is_ok());
        let err = vcs.commit("v1.0.0").unwrap_err();
        assert!(err.is_downstream());
        assert_eq!(vcs.calls(), vec![VcsCall::Stage(vec![])]);
    }
}
