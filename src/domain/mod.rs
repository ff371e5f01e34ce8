//! Domain logic - pure version rules independent of files and git

pub mod pair;
pub mod release;
pub mod version;

pub use pair::{RecordNames, ValidatedPair, VersionPair};
pub use release::ReleaseType;
pub use version::Increment;
