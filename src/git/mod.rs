//! Version-control abstraction layer
//!
//! After a bump the touched records can be committed and tagged. The
//! operations needed for that are behind the [Vcs] trait so that the
//! workflow never talks to a repository directly:
//!
//! - [repository::Git2Vcs]: a real implementation using the `git2` crate
//! - [mock::MockVcs]: an in-memory implementation for testing
//!
//! ```rust
//! # use versionize::git::Vcs;
//! # use std::path::PathBuf;
//! # fn example(vcs: &dyn Vcs) -> versionize::Result<()> {
//! vcs.stage(&[PathBuf::from("package.json"), PathBuf::from("manifest.json")])?;
//! vcs.commit("v0.4.0")?;
//! vcs.tag("v0.4.0")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockVcs;
pub use repository::Git2Vcs;

use crate::error::Result;
use std::path::PathBuf;

/// Operations the bump workflow needs from version control
///
/// ## Error Handling
///
/// Implementations report every failure as a [crate::error::VersionizeError];
/// the workflow downgrades them to warnings because the records are already
/// written by the time these run.
pub trait Vcs {
    /// Add the given files to the index
    ///
    /// # Arguments
    /// * `paths` - Files to stage, absolute or relative to the process
    ///   working directory
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit the staged changes on the current branch
    ///
    /// # Arguments
    /// * `message` - The full commit message
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag at the current `HEAD`
    ///
    /// # Arguments
    /// * `name` - Tag name, also used as the tag message
    fn tag(&self, name: &str) -> Result<()>;
}

impl<T: Vcs + ?Sized> Vcs for &T {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        (**self).stage(paths)
    }

    fn commit(&self, message: &str) -> Result<()> {
        (**self).commit(message)
    }

    fn tag(&self, name: &str) -> Result<()> {
        (**self).tag(name)
    }
}
