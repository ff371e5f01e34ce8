use crate::error::VersionizeError;
use std::fmt;
use std::str::FromStr;

/// Bump mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    /// Continue the prerelease line of the manifest only
    Latest,
    /// Promote to the next minor release, both records in step
    Stable,
    /// Next patch release, both records in step
    Hotfix,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 3] = [ReleaseType::Latest, ReleaseType::Stable, ReleaseType::Hotfix];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Latest => "latest",
            ReleaseType::Stable => "stable",
            ReleaseType::Hotfix => "hotfix",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = VersionizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseType::ALL
            .into_iter()
            .find(|release| release.as_str() == s)
            .ok_or_else(|| VersionizeError::InvalidReleaseType(s.to_string()))
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
