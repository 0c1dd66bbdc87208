use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings that apply to every request handled by the aligner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Treat every algorithm keyword other than `needleman` as local alignment instead of rejecting it.
    pub lenient_algorithm: bool,

    /// The maximum length of each sequence.
    ///
    /// The step log grows with the fourth power of the sequence length, so this bounds memory usage.
    pub max_sequence_length: Option<usize>,
}

impl EngineConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
