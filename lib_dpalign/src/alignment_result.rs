use std::fmt::{Display, Formatter, Result};

use serde::Serialize;
use step_log::StepRecord;

use crate::alignment_configuration::{AlignmentMode, Score, ScoringScheme};

pub mod step_log;

/// The symbol marking an insertion or deletion in an aligned sequence.
pub const GAP_SYMBOL: char = '-';

/// Two gapped sequences of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FinalAlignment {
    pub seq1: String,
    pub seq2: String,
}

/// The step log of the matrix fill together with the final alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    #[serde(rename = "matrix_steps")]
    pub steps: Vec<StepRecord>,
    pub final_alignment: FinalAlignment,

    #[serde(skip)]
    pub(crate) score: Score,
    #[serde(skip)]
    pub(crate) mode: AlignmentMode,
}

impl FinalAlignment {
    /// The amount of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Iterates over the alignment columns.
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.seq1.chars().zip(self.seq2.chars())
    }

    /// Recomputes the score of this alignment column by column.
    pub fn rescore(&self, scoring: &ScoringScheme) -> Score {
        self.columns()
            .map(|column| match column {
                (GAP_SYMBOL, _) | (_, GAP_SYMBOL) => scoring.gap_score,
                (a, b) if a == b => scoring.match_score,
                _ => scoring.mismatch_score,
            })
            .sum()
    }

    /// Both sequences with all gap symbols removed.
    pub fn ungapped(&self) -> (String, String) {
        (
            self.seq1.chars().filter(|&c| c != GAP_SYMBOL).collect(),
            self.seq2.chars().filter(|&c| c != GAP_SYMBOL).collect(),
        )
    }
}

impl AlignmentResult {
    /// The score of the cell the backtrace started from.
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }
}

impl Display for FinalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let markers: String = self
            .columns()
            .map(|(a, b)| if a == b && a != GAP_SYMBOL { '|' } else { ' ' })
            .collect();
        writeln!(f, "{}", self.seq1)?;
        writeln!(f, "{markers}")?;
        writeln!(f, "{}", self.seq2)
    }
}
