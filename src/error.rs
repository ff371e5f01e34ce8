use thiserror::Error;

/// Unified error type for versionize operations
#[derive(Error, Debug)]
pub enum VersionizeError {
    #[error("Not in package directory")]
    NotInPackageDirectory,

    #[error("{file} not found")]
    RecordMissing { file: String },

    #[error("Could not read version from {file}")]
    MissingPrimaryVersion { file: String },

    #[error("Version in {file} invalid")]
    InvalidPrimaryVersion { file: String },

    #[error("Version in {file} invalid")]
    InvalidSecondaryVersion { file: String },

    #[error("Versions in {primary} and {secondary} are inconsistent")]
    InconsistentVersions { primary: String, secondary: String },

    #[error("Invalid release type: {0}")]
    InvalidReleaseType(String),

    #[error("Version increment failed: {0}")]
    Increment(String),

    #[error("Could not parse {file}: {source}")]
    MalformedRecord {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file} must contain a JSON object")]
    NotAnObject { file: String },

    #[error("Git execution failed: {0}")]
    Vcs(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in versionize
pub type Result<T> = std::result::Result<T, VersionizeError>;

impl VersionizeError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionizeError::Config(msg.into())
    }

    /// Create a version-control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        VersionizeError::Vcs(msg.into())
    }

    /// Create an increment error with context
    pub fn increment(msg: impl Into<String>) -> Self {
        VersionizeError::Increment(msg.into())
    }

    /// Whether the error came from the version-control step rather than
    /// from loading, validating or writing the records.
    pub fn is_downstream(&self) -> bool {
        matches!(self, VersionizeError::Vcs(_) | VersionizeError::Git(_))
    }
}
