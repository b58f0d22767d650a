//! verbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verbump::manifest::bump_manifest_file;

/// Bump the minor version in a project manifest.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump the minor version in a project manifest")]
#[command(version)]
struct Cli {
    /// Path to the manifest file
    #[arg(default_value = "Cargo.toml")]
    manifest: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let new_version = bump_manifest_file(&cli.manifest)
        .with_context(|| format!("Failed to bump version in {}", cli.manifest.display()))?;

    println!("Version updated to {}", new_version);

    Ok(())
}
