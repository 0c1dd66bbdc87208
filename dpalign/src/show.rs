use std::{
    io::{Write, stderr, stdout},
    process::ExitCode,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use lib_dpalign::aligner::align_parsed_request;
use log::{LevelFilter, info};

use crate::{init_logging, input::CliInput};

#[derive(Parser, Debug)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    /// Show only this step, counting from one.
    ///
    /// By default, all steps are shown.
    #[clap(long, short = 's')]
    step: Option<usize>,
}

pub fn cli(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.log_level)?;

    match run(&cli, stdout().lock()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            report_failure(&error, stderr().lock())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Renders the matrix fill and the final alignment as text.
pub fn run(cli: &Cli, mut output: impl Write) -> Result<()> {
    let (request, config) = cli.input.load()?;
    let result = align_parsed_request(request, &config)?;
    let step_amount = result.steps.len();

    if let Some(step) = cli.step {
        let record = step
            .checked_sub(1)
            .and_then(|index| result.steps.get(index))
            .ok_or_else(|| {
                anyhow!("Step {step} does not exist, the alignment has {step_amount} steps")
            })?;
        writeln!(output, "Step {step}/{step_amount}: {record}")?;
    } else {
        info!("Rendering {step_amount} steps");
        for (index, record) in result.steps.iter().enumerate() {
            writeln!(output, "Step {}/{step_amount}: {record}", index + 1)?;
        }
    }

    writeln!(output, "Score: {}", result.score())?;
    write!(output, "{}", result.final_alignment)?;
    Ok(())
}

/// Writes the single line reporting a failed `show` run.
pub fn report_failure(error: &anyhow::Error, mut output: impl Write) -> Result<()> {
    writeln!(output, "Error: {error}")?;
    Ok(())
}
