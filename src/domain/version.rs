//! Semantic version arithmetic on top of the `semver` crate.
//!
//! `semver` parses and orders versions but does not increment them, so the
//! increments used by the release policy live here. They follow npm-semver:
//! a version carrying a prerelease is first "released" before it is bumped.

use crate::error::{Result, VersionizeError};
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;

/// Increment applied to a single version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// Next minor release (`0.3.0` -> `0.4.0`, `0.4.0-2` -> `0.4.0`)
    Minor,
    /// Next patch release (`0.3.0` -> `0.3.1`, `0.3.1-0` -> `0.3.1`)
    Patch,
    /// First prerelease of the next minor (`0.4.0` -> `0.5.0-0`)
    PreMinor,
    /// Next prerelease (`0.4.0-2` -> `0.4.0-3`, `0.4.0` -> `0.4.1-0`)
    PreRelease,
}

/// Parse a strict SemVer 2.0 string, `None` if it is not one.
pub fn parse(raw: &str) -> Option<Version> {
    Version::parse(raw).ok()
}

/// Whether `a` has lower precedence than `b`. Build metadata is ignored.
pub fn precedes(a: &Version, b: &Version) -> bool {
    a.cmp_precedence(b) == Ordering::Less
}

/// Apply `kind` to `version`, returning the new version.
///
/// Build metadata is always dropped. Fails only if a numeric component
/// would overflow.
pub fn increment(version: &Version, kind: Increment) -> Result<Version> {
    let mut next = version.clone();
    next.build = BuildMetadata::EMPTY;

    match kind {
        Increment::Minor => {
            // 1.3.0-2 is released as 1.3.0, not 1.4.0
            if next.patch != 0 || next.pre.is_empty() {
                next.minor = step(next.minor, "minor")?;
            }
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        Increment::Patch => {
            if next.pre.is_empty() {
                next.patch = step(next.patch, "patch")?;
            }
            next.pre = Prerelease::EMPTY;
        }
        Increment::PreMinor => {
            next.minor = step(next.minor, "minor")?;
            next.patch = 0;
            next.pre = first_prerelease()?;
        }
        Increment::PreRelease => {
            if next.pre.is_empty() {
                next.patch = step(next.patch, "patch")?;
                next.pre = first_prerelease()?;
            } else {
                next.pre = next_prerelease(&next.pre)?;
            }
        }
    }

    Ok(next)
}

fn step(value: u64, component: &str) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionizeError::increment(format!("{} component overflows", component)))
}

fn first_prerelease() -> Result<Prerelease> {
    Prerelease::new("0").map_err(|e| VersionizeError::increment(e.to_string()))
}

/// Bump the right-most numeric identifier, or append `.0` if there is none.
fn next_prerelease(pre: &Prerelease) -> Result<Prerelease> {
    let mut identifiers: Vec<String> = pre.as_str().split('.').map(str::to_string).collect();

    match identifiers.iter().rposition(|id| is_numeric(id)) {
        Some(index) => {
            let value = identifiers[index].parse::<u64>().map_err(|_| {
                VersionizeError::increment(format!(
                    "prerelease identifier '{}' is too large",
                    identifiers[index]
                ))
            })?;
            identifiers[index] = step(value, "prerelease")?.to_string();
        }
        None => identifiers.push("0".to_string()),
    }

    Prerelease::new(&identifiers.join(".")).map_err(|e| VersionizeError::increment(e.to_string()))
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}
