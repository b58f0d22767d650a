//! Error types for verbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version string parsing.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Malformed version '{0}': expected exactly three dot-separated components")]
    Malformed(String),

    #[error("Minor component '{minor}' of version '{version}' is not an integer: {source}")]
    NonNumericMinor {
        version: String,
        minor: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Errors from manifest operations.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No version = \"...\" assignment found in manifest")]
    VersionNotFound,

    #[error("Failed to parse manifest version: {0}")]
    InvalidVersion(#[source] VersionError),

    #[error("Failed to write manifest {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
