use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod input;
pub mod show;

/// Logs to stderr, keeping stdout free for the alignment output.
fn init_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
