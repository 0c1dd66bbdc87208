use std::{fmt::Display, str::FromStr};

use compact_genome::{
    implementation::{
        alphabets::{dna_alphabet::DnaAlphabet, rna_alphabet::RnaAlphabet},
        vec_sequence::VectorGenome,
    },
    interface::sequence::OwnedGenomeSequence,
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    alignment_matrix::TraceDirection,
    error::{Error, Result},
};

pub type Score = i64;

/// The algorithm keyword selecting [`AlignmentMode::Global`].
pub const GLOBAL_KEYWORD: &str = "needleman";
/// The algorithm keyword selecting [`AlignmentMode::Local`].
pub const LOCAL_KEYWORD: &str = "smith";

/// Linear scoring with one score for matches, mismatches and gaps each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub match_score: Score,
    pub mismatch_score: Score,
    pub gap_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Needleman-Wunsch.
    Global,
    /// Smith-Waterman.
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Molecule {
    Dna,
    Rna,
}

impl ScoringScheme {
    pub fn new(match_score: Score, mismatch_score: Score, gap_score: Score) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// The score of pairing the two given symbols.
    pub fn pair_score(&self, a: u8, b: u8) -> Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// The score added when stepping into a cell from the given direction.
    ///
    /// `pair` holds the two symbols aligned by a diagonal step.
    /// Returns `None` for [`TraceDirection::None`], which is not a step.
    pub fn step_score(&self, direction: TraceDirection, pair: (u8, u8)) -> Option<Score> {
        match direction {
            TraceDirection::None => None,
            TraceDirection::Diagonal => Some(self.pair_score(pair.0, pair.1)),
            TraceDirection::Up | TraceDirection::Left => Some(self.gap_score),
        }
    }
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_score: -1,
        }
    }
}

impl AlignmentMode {
    /// Interprets an algorithm keyword.
    ///
    /// The keyword is trimmed and lower-cased before comparison.
    /// In lenient mode, every keyword other than `needleman` selects local alignment.
    pub fn from_keyword(keyword: &str, lenient: bool) -> Result<Self> {
        let normalised = keyword.trim().to_lowercase();
        match normalised.as_str() {
            GLOBAL_KEYWORD => Ok(Self::Global),
            LOCAL_KEYWORD => Ok(Self::Local),
            _ if lenient => {
                warn!("Unknown algorithm '{normalised}', falling back to local alignment");
                Ok(Self::Local)
            }
            _ => Err(Error::UnknownAlgorithm(keyword.to_string())),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl Molecule {
    /// Checks that `sequence` only contains symbols of this molecule's alphabet.
    ///
    /// `name` is used in the error message.
    pub fn validate(&self, name: &'static str, sequence: &str) -> Result<()> {
        let result = match self {
            Self::Dna => VectorGenome::<DnaAlphabet>::from_slice_u8(sequence.as_bytes())
                .map(|_| ())
                .map_err(|error| error.to_string()),
            Self::Rna => VectorGenome::<RnaAlphabet>::from_slice_u8(sequence.as_bytes())
                .map(|_| ())
                .map_err(|error| error.to_string()),
        };

        result.map_err(|message| Error::InvalidSymbol {
            sequence: name,
            molecule: self.name(),
            message,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dna => "DNA",
            Self::Rna => "RNA",
        }
    }
}

impl FromStr for Molecule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dna" | "adn" => Ok(Self::Dna),
            "rna" | "arn" => Ok(Self::Rna),
            _ => Err(Error::UnknownMolecule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignmentMode, Molecule, ScoringScheme};
    use crate::{alignment_matrix::TraceDirection, error::Error};

    #[test]
    fn keywords() {
        assert_eq!(
            AlignmentMode::from_keyword("needleman", false).unwrap(),
            AlignmentMode::Global
        );
        assert_eq!(
            AlignmentMode::from_keyword("  SMITH\n", false).unwrap(),
            AlignmentMode::Local
        );
        assert!(matches!(
            AlignmentMode::from_keyword("needlman", false),
            Err(Error::UnknownAlgorithm(keyword)) if keyword == "needlman"
        ));
        assert_eq!(
            AlignmentMode::from_keyword("needlman", true).unwrap(),
            AlignmentMode::Local
        );
        assert_eq!(
            AlignmentMode::from_keyword(" Needleman ", true).unwrap(),
            AlignmentMode::Global
        );
    }

    #[test]
    fn step_scores() {
        let scoring = ScoringScheme::new(2, -3, -5);
        assert_eq!(scoring.pair_score(b'G', b'G'), 2);
        assert_eq!(scoring.pair_score(b'G', b'T'), -3);
        assert_eq!(
            scoring.step_score(TraceDirection::Diagonal, (b'A', b'A')),
            Some(2)
        );
        assert_eq!(
            scoring.step_score(TraceDirection::Diagonal, (b'A', b'C')),
            Some(-3)
        );
        assert_eq!(scoring.step_score(TraceDirection::Up, (b'A', b'A')), Some(-5));
        assert_eq!(scoring.step_score(TraceDirection::Left, (b'A', b'C')), Some(-5));
        assert_eq!(scoring.step_score(TraceDirection::None, (b'A', b'A')), None);
    }

    #[test]
    fn molecules() {
        assert_eq!("ADN".parse::<Molecule>().unwrap(), Molecule::Dna);
        assert_eq!(" rna ".parse::<Molecule>().unwrap(), Molecule::Rna);
        assert!(matches!(
            "protein".parse::<Molecule>(),
            Err(Error::UnknownMolecule(_))
        ));

        assert!(Molecule::Dna.validate("seq1", "ACGT").is_ok());
        assert!(Molecule::Dna.validate("seq1", "").is_ok());
        assert!(Molecule::Rna.validate("seq1", "ACGU").is_ok());
        assert!(matches!(
            Molecule::Dna.validate("seq2", "ACGU"),
            Err(Error::InvalidSymbol {
                sequence: "seq2",
                molecule: "DNA",
                ..
            })
        ));
        assert!(Molecule::Rna.validate("seq1", "ACGT").is_err());
    }
}
