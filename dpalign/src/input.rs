use std::{
    fs::File,
    io::{BufReader, stdin},
    path::PathBuf,
};

use clap::Args;
use lib_dpalign::{config::EngineConfig, error::Result, request::AlignmentRequest};
use log::{debug, info};

/// Where to read the request and the engine configuration from.
#[derive(Args, Debug, Clone)]
pub struct CliInput {
    /// The alignment request as a JSON object.
    ///
    /// It must contain the fields `seq1`, `seq2`, `match`, `mismatch`, `gap` and `algorithm`,
    /// and may contain `molecule`.
    /// If neither this nor `--request-file` is given, the request is read from stdin.
    #[clap(conflicts_with = "request_file")]
    request: Option<String>,

    /// The path to a file containing the alignment request as a JSON object.
    #[clap(long, short = 'f')]
    request_file: Option<PathBuf>,

    /// The path to a toml file configuring the aligner.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// Treat every algorithm other than `needleman` as local alignment instead of rejecting it.
    #[clap(long)]
    lenient_algorithm: bool,

    /// Reject sequences longer than this.
    ///
    /// Overrides the value from the configuration file.
    #[clap(long)]
    max_sequence_length: Option<usize>,
}

impl CliInput {
    pub fn config(&self) -> Result<EngineConfig> {
        let mut config = if let Some(path) = &self.config {
            info!("Loading configuration file {path:?}");
            EngineConfig::from_file(path)?
        } else {
            EngineConfig::default()
        };

        if self.lenient_algorithm {
            config.lenient_algorithm = true;
        }
        if let Some(max_sequence_length) = self.max_sequence_length {
            config.max_sequence_length = Some(max_sequence_length);
        }

        debug!("Using configuration {config:?}");
        Ok(config)
    }

    pub fn request(&self) -> Result<AlignmentRequest> {
        if let Some(request) = &self.request {
            AlignmentRequest::from_json(request)
        } else if let Some(path) = &self.request_file {
            info!("Loading request file {path:?}");
            AlignmentRequest::from_reader(BufReader::new(File::open(path)?))
        } else {
            info!("Reading request from stdin");
            AlignmentRequest::from_reader(stdin().lock())
        }
    }

    pub fn load(&self) -> Result<(AlignmentRequest, EngineConfig)> {
        let config = self.config()?;
        let request = self.request()?;
        Ok((request, config))
    }
}
