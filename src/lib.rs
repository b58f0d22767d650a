//! verbump - bump the minor version in a project manifest.
//!
//! # Overview
//!
//! verbump reads a manifest file (Cargo.toml by default), finds the first
//! `version = "major.minor.patch"` assignment, increments the minor
//! component by one, and rewrites the file in place. Major and patch are
//! carried through exactly as written; patch is not reset to zero.

pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use error::{ManifestError, VersionError};
pub use manifest::{BumpOutcome, bump_manifest_file, bump_minor_version};
pub use version::ManifestVersion;
