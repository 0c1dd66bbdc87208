use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use dpalign::{align, show};
use serde_json::Value;

/// Resolves a path relative to the repository root.
///
/// The working directory of integration tests is this crate, so paths are resolved from its parent.
pub fn repo_path(relative: &str) -> Result<PathBuf> {
    Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or(anyhow!("No parent directory"))?
        .join(relative))
}

/// Runs the `align` subcommand and returns whether it succeeded together with its parsed output.
pub fn run_align(args: &str) -> Result<(bool, Value)> {
    let cli = align::Cli::parse_from(args.split_whitespace());
    let mut output = Vec::new();
    let success = align::run(&cli, &mut output)?;
    Ok((success, serde_json::from_slice(&output)?))
}

/// Runs the `show` subcommand and returns its text output.
pub fn run_show(args: &str) -> Result<String> {
    let cli = show::Cli::parse_from(args.split_whitespace());
    let mut output = Vec::new();
    show::run(&cli, &mut output)?;
    Ok(String::from_utf8(output)?)
}
