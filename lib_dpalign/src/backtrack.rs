use std::collections::VecDeque;

use log::debug;

use crate::{
    alignment_matrix::{AlignmentMatrix, TraceDirection, index::AlignmentMatrixIndex},
    alignment_result::{FinalAlignment, GAP_SYMBOL},
    error::{Error, Result},
};

/// Reconstructs the aligned sequences by walking the trace matrix of a filled [`AlignmentMatrix`].
pub struct Backtracker<'matrix> {
    matrix: &'matrix AlignmentMatrix,
    seq1: &'matrix [u8],
    seq2: &'matrix [u8],
    state: BacktrackState,
    aligned_seq1: VecDeque<char>,
    aligned_seq2: VecDeque<char>,
    steps: usize,
    step_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BacktrackState {
    Walking(AlignmentMatrixIndex),
    Halted,
}

impl<'matrix> Backtracker<'matrix> {
    /// Prepares a walk from the terminal cell of `matrix`.
    ///
    /// The walk is limited to `m + n` steps, which any well-formed trace matrix respects.
    /// Fails if the sequences do not span the matrix.
    pub fn new(
        matrix: &'matrix AlignmentMatrix,
        seq1: &'matrix [u8],
        seq2: &'matrix [u8],
    ) -> Result<Self> {
        let dim = matrix.dim();
        Self::with_step_limit(matrix, seq1, seq2, dim.row - 1 + dim.column - 1)
    }

    pub fn with_step_limit(
        matrix: &'matrix AlignmentMatrix,
        seq1: &'matrix [u8],
        seq2: &'matrix [u8],
        step_limit: usize,
    ) -> Result<Self> {
        matrix.check_sequences(seq1, seq2)?;
        let start = matrix.terminal_index();
        debug!(
            "Backtracking from {start} with score {}",
            matrix.score(start)
        );

        Ok(Self {
            matrix,
            seq1,
            seq2,
            state: BacktrackState::Walking(start),
            aligned_seq1: VecDeque::new(),
            aligned_seq2: VecDeque::new(),
            steps: 0,
            step_limit,
        })
    }

    pub fn run(mut self) -> Result<FinalAlignment> {
        while let BacktrackState::Walking(index) = self.state {
            self.state = self.transition(index)?;
        }

        debug!("Backtrack halted after {} steps", self.steps);
        Ok(FinalAlignment {
            seq1: self.aligned_seq1.into_iter().collect(),
            seq2: self.aligned_seq2.into_iter().collect(),
        })
    }

    fn is_terminal(&self, index: AlignmentMatrixIndex) -> bool {
        index.is_origin() || (self.matrix.mode().is_local() && self.matrix.score(index) <= 0)
    }

    fn transition(&mut self, index: AlignmentMatrixIndex) -> Result<BacktrackState> {
        if self.is_terminal(index) {
            return Ok(BacktrackState::Halted);
        }

        let direction = self.matrix.direction(index);
        if direction == TraceDirection::None {
            return Ok(BacktrackState::Halted);
        }

        if self.steps >= self.step_limit {
            return Err(Error::CorruptedTraceGuardExceeded {
                limit: self.step_limit,
            });
        }

        let predecessor = index.predecessor(direction).ok_or(Error::CorruptedTrace {
            row: index.row,
            column: index.column,
        })?;

        let (symbol1, symbol2) = match direction {
            TraceDirection::Diagonal => (
                char::from(self.seq1[index.column - 1]),
                char::from(self.seq2[index.row - 1]),
            ),
            TraceDirection::Left => (char::from(self.seq1[index.column - 1]), GAP_SYMBOL),
            TraceDirection::Up => (GAP_SYMBOL, char::from(self.seq2[index.row - 1])),
            TraceDirection::None => unreachable!("direction 'None' halts the walk"),
        };
        self.aligned_seq1.push_front(symbol1);
        self.aligned_seq2.push_front(symbol2);
        self.steps += 1;

        Ok(BacktrackState::Walking(predecessor))
    }
}

/// Walks the trace matrix from its terminal cell and returns the aligned sequences.
pub fn backtrack(matrix: &AlignmentMatrix, seq1: &[u8], seq2: &[u8]) -> Result<FinalAlignment> {
    Backtracker::new(matrix, seq1, seq2)?.run()
}
