//! Locating the project root and loading its two version records.

use crate::domain::{RecordNames, VersionPair};
use crate::error::{Result, VersionizeError};
use crate::record::Record;
use std::path::{Path, PathBuf};

/// Walk up from `cwd` to the first directory containing `marker`.
pub fn find_project_root(cwd: &Path, marker: &str) -> Option<PathBuf> {
    cwd.ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Both records of a project, as loaded at the start of an operation
#[derive(Debug, Clone)]
pub struct PackageRecords {
    root: PathBuf,
    names: RecordNames,
    primary: Record,
    secondary: Record,
}

impl PackageRecords {
    /// Find the project root above `cwd` and read both records.
    ///
    /// The primary record must exist. A missing secondary record loads as
    /// an empty one so that a bump can create it.
    pub fn load(cwd: &Path, names: &RecordNames) -> Result<Self> {
        let root =
            find_project_root(cwd, &names.primary).ok_or(VersionizeError::NotInPackageDirectory)?;
        tracing::debug!(root = %root.display(), "found project root");

        let primary =
            Record::read(root.join(&names.primary))?.ok_or_else(|| VersionizeError::RecordMissing {
                file: names.primary.clone(),
            })?;
        let secondary = Record::read_or_empty(root.join(&names.secondary))?;

        Ok(PackageRecords {
            root,
            names: names.clone(),
            primary,
            secondary,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn names(&self) -> &RecordNames {
        &self.names
    }

    pub fn primary(&self) -> &Record {
        &self.primary
    }

    pub fn secondary(&self) -> &Record {
        &self.secondary
    }

    /// The raw version strings, not yet validated
    pub fn versions(&self) -> VersionPair {
        VersionPair {
            primary: self.primary.version(),
            secondary: self.secondary.version(),
        }
    }
}
