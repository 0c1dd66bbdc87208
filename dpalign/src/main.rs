use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dpalign::{align, show};

#[derive(Parser)]
#[command(version, about)]
enum Cli {
    /// Align two sequences and print the step log and final alignment as JSON.
    Align(align::Cli),

    /// Align two sequences and render the matrix fill step by step as text.
    Show(show::Cli),
}

fn main() -> Result<ExitCode> {
    match Cli::parse() {
        Cli::Align(cli) => align::cli(cli),
        Cli::Show(cli) => show::cli(cli),
    }
}
