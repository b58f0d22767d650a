//! Manifest version bumping pipeline.
//!
//! Read, extract, parse, increment, substitute, write: the linear sequence a
//! release workflow runs once per invocation.

pub mod parser;
pub mod writer;

use std::path::Path;

use tracing::debug;

use crate::error::ManifestError;
use crate::version::ManifestVersion;

use self::parser::{VersionMatch, extract_version};
use self::writer::{read_manifest, substitute_version, write_manifest};

/// The result of bumping a manifest's version in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub old_version: String,
    pub new_version: String,
    pub updated_content: String,
}

/// Bump the minor version inside manifest text.
///
/// Pure on the text, no file IO, so the pipeline stays testable against
/// in-memory content.
pub fn bump_minor_version(content: &str) -> Result<BumpOutcome, ManifestError> {
    let current = match extract_version(content) {
        VersionMatch::Found(v) => v,
        VersionMatch::NotFound => return Err(ManifestError::VersionNotFound),
    };

    let version = ManifestVersion::parse(current).map_err(ManifestError::InvalidVersion)?;
    let next = version.bump_minor().to_string();

    debug!(old = current, new = %next, "Calculated minor bump");

    Ok(BumpOutcome {
        old_version: current.to_string(),
        updated_content: substitute_version(content, current, &next),
        new_version: next,
    })
}

/// Bump the minor version of the manifest at `path`, rewriting it in place.
///
/// Returns the new version string for reporting.
pub fn bump_manifest_file(path: &Path) -> Result<String, ManifestError> {
    let content = read_manifest(path)?;
    let outcome = bump_minor_version(&content)?;
    write_manifest(path, &outcome.updated_content)?;
    Ok(outcome.new_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_minor_version_in_memory() {
        let content = "line1\nversion = \"1.2.3\"\nline2\n";
        let outcome = bump_minor_version(content).unwrap();
        assert_eq!(outcome.old_version, "1.2.3");
        assert_eq!(outcome.new_version, "1.3.3");
        assert_eq!(outcome.updated_content, "line1\nversion = \"1.3.3\"\nline2\n");
    }

    #[test]
    fn test_bump_without_version_assignment() {
        let result = bump_minor_version("[package]\nname = \"demo\"\n");
        assert!(matches!(result, Err(ManifestError::VersionNotFound)));
    }

    #[test]
    fn test_bump_with_malformed_version() {
        let result = bump_minor_version("version = \"1.2\"\n");
        assert!(matches!(result, Err(ManifestError::InvalidVersion(_))));
    }
}
