//! The primary/secondary version pair and the rules coupling them.
//!
//! The primary version lives in the package descriptor, the secondary in
//! the manifest. A consistent pair has either equal versions, or a
//! secondary that is a prerelease on the way to the next minor above the
//! primary: `primary < secondary < inc(primary, minor)`.

use crate::domain::release::ReleaseType;
use crate::domain::version::{self, Increment};
use crate::error::{Result, VersionizeError};
use semver::Version;

/// File names used in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNames {
    pub primary: String,
    pub secondary: String,
}

impl Default for RecordNames {
    fn default() -> Self {
        RecordNames {
            primary: "package.json".to_string(),
            secondary: "manifest.json".to_string(),
        }
    }
}

/// Raw, unvalidated version strings as read from the records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionPair {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// A pair whose versions both parse and satisfy the coupling invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPair {
    primary: Version,
    secondary: Version,
}

impl VersionPair {
    pub fn new(primary: Option<&str>, secondary: Option<&str>) -> Self {
        VersionPair {
            primary: primary.map(str::to_string),
            secondary: secondary.map(str::to_string),
        }
    }

    /// Check presence, validity and consistency, in that order.
    ///
    /// A missing secondary version defaults to the primary one.
    pub fn validate(&self, names: &RecordNames) -> Result<ValidatedPair> {
        let raw_primary = present(&self.primary).ok_or_else(|| {
            VersionizeError::MissingPrimaryVersion {
                file: names.primary.clone(),
            }
        })?;

        let primary =
            version::parse(raw_primary).ok_or_else(|| VersionizeError::InvalidPrimaryVersion {
                file: names.primary.clone(),
            })?;

        let secondary = match present(&self.secondary) {
            None => primary.clone(),
            Some(raw) => {
                version::parse(raw).ok_or_else(|| VersionizeError::InvalidSecondaryVersion {
                    file: names.secondary.clone(),
                })?
            }
        };

        if secondary == primary {
            return Ok(ValidatedPair { primary, secondary });
        }

        let next_minor = version::increment(&primary, Increment::Minor)?;
        if version::precedes(&primary, &secondary) && version::precedes(&secondary, &next_minor) {
            return Ok(ValidatedPair { primary, secondary });
        }

        Err(VersionizeError::InconsistentVersions {
            primary: names.primary.clone(),
            secondary: names.secondary.clone(),
        })
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

impl ValidatedPair {
    pub fn primary(&self) -> &Version {
        &self.primary
    }

    pub fn secondary(&self) -> &Version {
        &self.secondary
    }

    /// Back to raw strings, as they would be written to the records
    pub fn to_pair(&self) -> VersionPair {
        VersionPair {
            primary: Some(self.primary.to_string()),
            secondary: Some(self.secondary.to_string()),
        }
    }

    /// Compute the pair that follows this one for `release`.
    ///
    /// Pure: no I/O, same input always gives the same output.
    pub fn increment(&self, release: ReleaseType) -> Result<ValidatedPair> {
        match release {
            ReleaseType::Stable => {
                let result = version::increment(&self.primary, Increment::Minor)?;
                Ok(ValidatedPair::synced(result))
            }
            ReleaseType::Hotfix => {
                let result = version::increment(&self.primary, Increment::Patch)?;
                Ok(ValidatedPair::synced(result))
            }
            ReleaseType::Latest => {
                let kind = if self.secondary.pre.is_empty() {
                    Increment::PreMinor
                } else {
                    Increment::PreRelease
                };
                Ok(ValidatedPair {
                    primary: self.primary.clone(),
                    secondary: version::increment(&self.secondary, kind)?,
                })
            }
        }
    }

    fn synced(version: Version) -> Self {
        ValidatedPair {
            primary: version.clone(),
            secondary: version,
        }
    }
}
