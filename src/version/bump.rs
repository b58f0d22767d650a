//! Minor-version arithmetic on manifest version strings.

use std::fmt;

use crate::error::VersionError;

/// A version parsed from a manifest's `"major.minor.patch"` string.
///
/// Only the minor component is numeric. Major and patch are carried as the
/// exact text they were written with, so `"01.2.003"` survives a bump as
/// `"01.3.003"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    pub major: String,
    pub minor: u64,
    pub patch: String,
}

impl ManifestVersion {
    /// Parse a dotted version string into its three components.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::Malformed(raw.to_string()));
        }

        let minor = parts[1]
            .parse::<u64>()
            .map_err(|source| VersionError::NonNumericMinor {
                version: raw.to_string(),
                minor: parts[1].to_string(),
                source,
            })?;

        Ok(Self {
            major: parts[0].to_string(),
            minor,
            patch: parts[2].to_string(),
        })
    }

    /// Return the version with the minor component incremented by one.
    ///
    /// Patch is carried over unchanged, not reset to zero.
    pub fn bump_minor(&self) -> Self {
        Self {
            major: self.major.clone(),
            minor: self.minor + 1,
            patch: self.patch.clone(),
        }
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
