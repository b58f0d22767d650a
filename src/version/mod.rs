//! Version parsing and minor bumping.

pub mod bump;

pub use bump::ManifestVersion;
