use std::{
    io::{Write, stdout},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use lib_dpalign::aligner::{AlignmentResponse, align_parsed_request};
use log::LevelFilter;

use crate::{init_logging, input::CliInput};

#[derive(Parser, Debug)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pretty: bool,
}

/// Prints the response and exits with a failure code if the request failed.
pub fn cli(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.log_level)?;

    if run(&cli, stdout().lock())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Writes the JSON response for the request to `output`.
///
/// Returns `false` if the request failed, in which case the response is an error object.
/// Only failures to write the output are returned as errors.
pub fn run(cli: &Cli, mut output: impl Write) -> Result<bool> {
    let response: AlignmentResponse = cli
        .input
        .load()
        .and_then(|(request, config)| align_parsed_request(request, &config))
        .into();

    writeln!(output, "{}", response.to_json(cli.pretty)?)?;
    Ok(response.is_success())
}
