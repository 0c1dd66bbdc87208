use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    MalformedInput(String),

    #[error("Unknown algorithm '{0}', expected 'needleman' or 'smith'")]
    UnknownAlgorithm(String),

    #[error("Unknown molecule '{0}', expected 'dna' or 'rna'")]
    UnknownMolecule(String),

    #[error("{sequence} is not a valid {molecule} sequence: {message}")]
    InvalidSymbol {
        sequence: &'static str,
        molecule: &'static str,
        message: String,
    },

    #[error("{sequence} has length {length}, which exceeds the limit of {limit}")]
    SequenceTooLong {
        sequence: &'static str,
        length: usize,
        limit: usize,
    },

    #[error("Score overflow while computing cell at row {row}, column {column}")]
    ScoreOverflow { row: usize, column: usize },

    #[error("Trace matrix points outside of the matrix at row {row}, column {column}")]
    CorruptedTrace { row: usize, column: usize },

    #[error("Backtrace did not terminate within {limit} steps, the trace matrix is corrupted")]
    CorruptedTraceGuardExceeded { limit: usize },

    #[error("Could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}
