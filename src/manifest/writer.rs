//! Manifest file IO with atomic replacement.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ManifestError;

/// Read the full manifest text from disk.
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Swap the first occurrence of the old version assignment for the new one.
///
/// This is a literal substring replacement; every byte outside the matched
/// assignment is preserved as-is.
pub fn substitute_version(content: &str, old_version: &str, new_version: &str) -> String {
    let old_assignment = format!("version = \"{old_version}\"");
    let new_assignment = format!("version = \"{new_version}\"");
    content.replacen(&old_assignment, &new_assignment, 1)
}

/// Write the manifest text back to `path`.
///
/// The content is staged in a temporary file in the same directory and
/// renamed over the target, so a crash mid-write cannot leave a truncated
/// manifest behind.
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|source| ManifestError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    staged
        .write_all(content.as_bytes())
        .map_err(|source| ManifestError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    staged.persist(path).map_err(|e| ManifestError::WriteFailed {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), "Manifest written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_substitute_replaces_only_first_occurrence() {
        let content = "version = \"1.2.3\"\ndep = { version = \"1.2.3\" }\n";
        let updated = substitute_version(content, "1.2.3", "1.3.3");
        assert_eq!(
            updated,
            "version = \"1.3.3\"\ndep = { version = \"1.2.3\" }\n"
        );
    }

    #[test]
    fn test_substitute_preserves_surrounding_bytes() {
        let content = "line1\nversion = \"1.2.3\"\nline2\n";
        let updated = substitute_version(content, "1.2.3", "1.3.3");
        assert_eq!(updated, "line1\nversion = \"1.3.3\"\nline2\n");
    }

    #[test]
    fn test_write_manifest_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "old content that is much longer than the new one\n").unwrap();

        write_manifest(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_manifest(&dir.path().join("Cargo.toml"));
        assert!(matches!(result, Err(ManifestError::ReadFailed { .. })));
    }
}
