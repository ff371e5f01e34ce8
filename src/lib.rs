pub mod boundary;
pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod package;
pub mod record;
pub mod ui;

pub use bump::{BumpResult, Versionizer};
pub use domain::{ReleaseType, ValidatedPair, VersionPair};
pub use error::{Result, VersionizeError};
