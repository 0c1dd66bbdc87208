use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{
    alignment_configuration::{AlignmentMode, Molecule, Score, ScoringScheme},
    alignment_result::GAP_SYMBOL,
    config::EngineConfig,
    error::{Error, Result},
};

/// An alignment request as received from a caller.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRequest {
    pub seq1: String,
    pub seq2: String,
    #[serde(rename = "match")]
    pub match_score: Score,
    pub mismatch: Score,
    pub gap: Score,
    pub algorithm: String,
    #[serde(default, alias = "molecula", skip_serializing_if = "Option::is_none")]
    pub molecule: Option<String>,
}

/// Two trimmed, upper-cased ASCII sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    seq1: String,
    seq2: String,
}

/// A validated request, ready to be aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTask {
    pub sequences: SequencePair,
    pub scoring: ScoringScheme,
    pub mode: AlignmentMode,
}

impl AlignmentRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|error| Error::MalformedInput(error.to_string()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|error| Error::MalformedInput(error.to_string()))
    }

    /// Normalises and validates this request.
    pub fn into_task(self, config: &EngineConfig) -> Result<AlignmentTask> {
        let mode = AlignmentMode::from_keyword(&self.algorithm, config.lenient_algorithm)?;
        let sequences = SequencePair::new(&self.seq1, &self.seq2)?;

        if let Some(limit) = config.max_sequence_length {
            for (name, sequence) in sequences.named() {
                if sequence.len() > limit {
                    return Err(Error::SequenceTooLong {
                        sequence: name,
                        length: sequence.len(),
                        limit,
                    });
                }
            }
        }

        if let Some(molecule) = &self.molecule {
            let molecule: Molecule = molecule.parse()?;
            for (name, sequence) in sequences.named() {
                molecule.validate(name, sequence)?;
            }
        }

        Ok(AlignmentTask {
            sequences,
            scoring: ScoringScheme::new(self.match_score, self.mismatch, self.gap),
            mode,
        })
    }
}

impl SequencePair {
    /// Trims surrounding whitespace and converts to upper case.
    ///
    /// Sequences must be ASCII, since each byte is aligned as one symbol.
    /// The gap symbol is reserved for the aligned output.
    pub fn new(seq1: &str, seq2: &str) -> Result<Self> {
        Ok(Self {
            seq1: normalise("seq1", seq1)?,
            seq2: normalise("seq2", seq2)?,
        })
    }

    pub fn seq1(&self) -> &str {
        &self.seq1
    }

    pub fn seq2(&self) -> &str {
        &self.seq2
    }

    fn named(&self) -> [(&'static str, &str); 2] {
        [("seq1", self.seq1.as_str()), ("seq2", self.seq2.as_str())]
    }
}

fn normalise(name: &str, sequence: &str) -> Result<String> {
    let sequence = sequence.trim();
    if !sequence.is_ascii() {
        return Err(Error::MalformedInput(format!(
            "{name} contains non-ASCII characters"
        )));
    }
    if sequence.contains(GAP_SYMBOL) {
        return Err(Error::MalformedInput(format!(
            "{name} contains the gap symbol '{GAP_SYMBOL}'"
        )));
    }
    Ok(sequence.to_ascii_uppercase())
}
