//! Load, validate, increment and persist a version pair.
//!
//! Every call reads the records fresh from disk; nothing is cached
//! between calls. Writing is per record: if the second write fails the
//! first one is not rolled back.

use crate::config::Config;
use crate::domain::{RecordNames, ReleaseType, ValidatedPair};
use crate::error::Result;
use crate::package::PackageRecords;
use crate::record::RecordHandle;
use semver::Version;
use std::path::{Path, PathBuf};

/// Outcome of one bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpResult {
    /// Secondary version before the bump
    pub current_version: Version,
    /// Secondary version after the bump
    pub new_version: Version,
    pub previous: ValidatedPair,
    pub next: ValidatedPair,
    /// Primary record first, then secondary
    pub touched_records: Vec<RecordHandle>,
}

impl BumpResult {
    pub fn touched_paths(&self) -> Vec<PathBuf> {
        self.touched_records
            .iter()
            .map(|handle| handle.path().to_path_buf())
            .collect()
    }
}

/// Entry point of the library: version operations rooted at a directory
#[derive(Debug, Clone)]
pub struct Versionizer {
    cwd: PathBuf,
    names: RecordNames,
}

impl Versionizer {
    pub fn new(cwd: impl Into<PathBuf>, names: RecordNames) -> Self {
        Versionizer {
            cwd: cwd.into(),
            names,
        }
    }

    pub fn from_config(cwd: impl Into<PathBuf>, config: &Config) -> Self {
        Versionizer::new(cwd, config.records.names())
    }

    /// Rooted at the process working directory
    pub fn in_current_dir(names: RecordNames) -> Result<Self> {
        Ok(Versionizer::new(std::env::current_dir()?, names))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn load(&self) -> Result<(PackageRecords, ValidatedPair)> {
        let records = PackageRecords::load(&self.cwd, &self.names)?;
        let pair = records.versions().validate(&self.names)?;
        Ok((records, pair))
    }

    /// The validated secondary version. Read-only.
    pub fn current_version(&self) -> Result<Version> {
        let (_, pair) = self.load()?;
        Ok(pair.secondary().clone())
    }

    /// Bump both records according to `release` and write them back.
    ///
    /// The secondary record is created if it did not exist. Fields other
    /// than `version` are left as they were.
    pub fn bump(&self, release: ReleaseType) -> Result<BumpResult> {
        let (records, previous) = self.load()?;
        let next = previous.increment(release)?;

        let primary = records.primary().with_version(next.primary());
        let secondary = records.secondary().with_version(next.secondary());
        primary.write()?;
        secondary.write()?;

        tracing::info!(
            root = %records.root().display(),
            %release,
            from = %previous.secondary(),
            to = %next.secondary(),
            "bumped version"
        );

        Ok(BumpResult {
            current_version: previous.secondary().clone(),
            new_version: next.secondary().clone(),
            previous,
            next,
            touched_records: vec![primary.handle().clone(), secondary.handle().clone()],
        })
    }
}
