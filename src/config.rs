use crate::domain::RecordNames;
use crate::error::{Result, VersionizeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "versionize.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".versionize.toml";

/// Represents the complete configuration for versionize.
///
/// Contains the names of the two version records and the git defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub records: RecordsConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_primary() -> String {
    "package.json".to_string()
}

fn default_secondary() -> String {
    "manifest.json".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Which files hold the primary and secondary versions.
///
/// The primary file also marks the project root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RecordsConfig {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_secondary")]
    pub secondary: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        RecordsConfig {
            primary: default_primary(),
            secondary: default_secondary(),
        }
    }
}

impl RecordsConfig {
    pub fn names(&self) -> RecordNames {
        RecordNames {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
        }
    }
}

/// Git behaviour after a successful bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Prefix of the commit message and tag name
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Commit even without `--commit`
    #[serde(default)]
    pub commit: bool,

    /// Commit and tag even without `--tag`
    #[serde(default)]
    pub tag: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            tag_prefix: default_tag_prefix(),
            commit: false,
            tag: false,
        }
    }
}

impl GitConfig {
    /// Commit message and tag name for `version`
    pub fn label(&self, version: &impl std::fmt::Display) -> String {
        format!("{}{}", self.tag_prefix, version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionize.toml` in `cwd`
/// 3. `.versionize.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `cwd` - Directory searched for a project-level file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, cwd: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(cwd),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        VersionizeError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        VersionizeError::config(format!("cannot parse {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn discover_config(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(PROJECT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}
