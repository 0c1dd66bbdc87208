use index::{
    AlignmentMatrixIndex,
    iterators::{BorderCells, FillCell, FillCells},
};
use log::{debug, trace};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    alignment_configuration::{AlignmentMode, Score, ScoringScheme},
    alignment_result::step_log::StepRecorder,
    error::{Error, Result},
};

pub mod index;

/// The score matrix and the parallel trace matrix of a pairwise alignment.
///
/// The matrix has one row per symbol of `seq2` and one column per symbol of `seq1`, plus a border row and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    scores: Array2<Score>,
    trace: Array2<TraceDirection>,
    scoring: ScoringScheme,
    mode: AlignmentMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub score: Score,
    pub direction: TraceDirection,
}

/// The predecessor a cell's score was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceDirection {
    /// Marks the origin, and in local mode the start of a new local alignment.
    #[default]
    None,
    Diagonal,
    Up,
    Left,
}

impl AlignmentMatrix {
    pub fn new(
        scoring: ScoringScheme,
        mode: AlignmentMode,
        seq1_length: usize,
        seq2_length: usize,
    ) -> Self {
        let dim = (seq2_length + 1, seq1_length + 1);
        Self {
            scores: Array2::default(dim),
            trace: Array2::default(dim),
            scoring,
            mode,
        }
    }

    /// One past the last row and column.
    pub fn dim(&self) -> AlignmentMatrixIndex {
        let (rows, columns) = self.scores.dim();
        AlignmentMatrixIndex::new(rows, columns)
    }

    pub fn scores(&self) -> &Array2<Score> {
        &self.scores
    }

    pub fn trace(&self) -> &Array2<TraceDirection> {
        &self.trace
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    pub fn score(&self, index: AlignmentMatrixIndex) -> Score {
        self.scores[index]
    }

    pub fn direction(&self, index: AlignmentMatrixIndex) -> TraceDirection {
        self.trace[index]
    }

    pub fn entry(&self, index: AlignmentMatrixIndex) -> AlignmentMatrixEntry {
        AlignmentMatrixEntry {
            score: self.scores[index],
            direction: self.trace[index],
        }
    }

    pub fn border_cells(&self) -> BorderCells {
        BorderCells::new(self.dim())
    }

    /// Fails if the sequences do not span this matrix.
    pub fn check_sequences(&self, seq1: &[u8], seq2: &[u8]) -> Result<()> {
        if self.scores.dim() == (seq2.len() + 1, seq1.len() + 1) {
            Ok(())
        } else {
            Err(Error::MalformedInput(format!(
                "sequences of lengths {} and {} do not fit a matrix of dimension {:?}",
                seq1.len(),
                seq2.len(),
                self.scores.dim()
            )))
        }
    }

    /// Fills the matrix, reporting every inner cell to `recorder` right after it was written.
    ///
    /// Cells are filled in row-major order.
    pub fn fill(
        &mut self,
        seq1: &[u8],
        seq2: &[u8],
        recorder: &mut impl StepRecorder,
    ) -> Result<()> {
        self.check_sequences(seq1, seq2)?;
        debug!(
            "Filling {}x{} matrix in {} mode",
            self.scores.dim().0,
            self.scores.dim().1,
            self.mode
        );

        self.initialise()?;

        for cell in FillCells::new(seq1, seq2) {
            let index = cell.index;
            let entry = self.compute_max_entry(cell)?;
            self.set_entry(index, entry);
            trace!("Filled {index} with {} from {:?}", entry.score, entry.direction);
            recorder.record(&self.scores, index, entry.direction);
        }

        Ok(())
    }

    /// The cell the backtrace starts from.
    ///
    /// In global mode, this is the bottom-right corner.
    /// In local mode, this is the first cell holding the maximum score in row-major order.
    pub fn terminal_index(&self) -> AlignmentMatrixIndex {
        match self.mode {
            AlignmentMode::Global => {
                let dim = self.dim();
                AlignmentMatrixIndex::new(dim.row - 1, dim.column - 1)
            }
            AlignmentMode::Local => {
                let mut best = AlignmentMatrixIndex::new(0, 0);
                for ((row, column), &score) in self.scores.indexed_iter() {
                    if score > self.scores[best] {
                        best = AlignmentMatrixIndex::new(row, column);
                    }
                }
                best
            }
        }
    }

    pub fn terminal_score(&self) -> Score {
        self.scores[self.terminal_index()]
    }

    fn initialise(&mut self) -> Result<()> {
        // Initialise matrix origin.
        self.set_entry(
            AlignmentMatrixIndex::new(0, 0),
            AlignmentMatrixEntry {
                score: 0,
                direction: TraceDirection::None,
            },
        );

        // Initialise matrix edges.
        for (index, direction) in self.border_cells() {
            let entry = match self.mode {
                AlignmentMode::Global => self.compute_gap_entry(index, direction)?,
                AlignmentMode::Local => AlignmentMatrixEntry {
                    score: 0,
                    direction: TraceDirection::None,
                },
            };
            self.set_entry(index, entry);
        }

        Ok(())
    }

    fn set_entry(&mut self, index: AlignmentMatrixIndex, entry: AlignmentMatrixEntry) {
        self.scores[index] = entry.score;
        self.trace[index] = entry.direction;
    }

    /// Selects the best of the three predecessors.
    ///
    /// Ties are broken in a fixed order: diagonal before up, up before left.
    /// In local mode, a negative best score is replaced by zero without a direction.
    fn compute_max_entry(&self, cell: FillCell) -> Result<AlignmentMatrixEntry> {
        let index = cell.index;
        let mut entry = self.compute_diagonal_entry(index, cell.symbols)?;

        let up_entry = self.compute_gap_entry(index, TraceDirection::Up)?;
        if up_entry.score > entry.score {
            entry = up_entry;
        }

        let left_entry = self.compute_gap_entry(index, TraceDirection::Left)?;
        if left_entry.score > entry.score {
            entry = left_entry;
        }

        if self.mode.is_local() && entry.score < 0 {
            entry = AlignmentMatrixEntry {
                score: 0,
                direction: TraceDirection::None,
            };
        }

        Ok(entry)
    }

    fn compute_gap_entry(
        &self,
        index: AlignmentMatrixIndex,
        direction: TraceDirection,
    ) -> Result<AlignmentMatrixEntry> {
        let predecessor = index
            .predecessor(direction)
            .ok_or(Error::CorruptedTrace {
                row: index.row,
                column: index.column,
            })?;

        self.checked_entry(index, predecessor, self.scoring.gap_score, direction)
    }

    fn compute_diagonal_entry(
        &self,
        index: AlignmentMatrixIndex,
        (symbol1, symbol2): (u8, u8),
    ) -> Result<AlignmentMatrixEntry> {
        let direction = TraceDirection::Diagonal;
        let predecessor = index
            .predecessor(direction)
            .ok_or(Error::CorruptedTrace {
                row: index.row,
                column: index.column,
            })?;
        let step_score = self.scoring.pair_score(symbol1, symbol2);

        self.checked_entry(index, predecessor, step_score, direction)
    }

    fn checked_entry(
        &self,
        index: AlignmentMatrixIndex,
        predecessor: AlignmentMatrixIndex,
        step_score: Score,
        direction: TraceDirection,
    ) -> Result<AlignmentMatrixEntry> {
        let score = self.scores[predecessor]
            .checked_add(step_score)
            .ok_or(Error::ScoreOverflow {
                row: index.row,
                column: index.column,
            })?;

        Ok(AlignmentMatrixEntry { score, direction })
    }

    #[cfg(test)]
    pub(crate) fn manual_debug_fill(
        &mut self,
        entries: impl IntoIterator<Item = AlignmentMatrixEntry>,
    ) {
        let mut entries = entries.into_iter();
        for index in self.inner_indices() {
            self.set_entry(index, entries.next().unwrap());
        }
        assert!(entries.next().is_none());
    }

    /// All cells outside of row and column zero, in row-major order.
    #[cfg(test)]
    pub(crate) fn inner_indices(&self) -> Vec<AlignmentMatrixIndex> {
        self.scores
            .indexed_iter()
            .filter(|((row, column), _)| *row > 0 && *column > 0)
            .map(|((row, column), _)| AlignmentMatrixIndex::new(row, column))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn manual_debug_set(
        &mut self,
        index: AlignmentMatrixIndex,
        entry: AlignmentMatrixEntry,
    ) {
        self.set_entry(index, entry);
    }
}

impl TraceDirection {
    pub fn as_char(&self) -> char {
        match self {
            TraceDirection::None => 'N',
            TraceDirection::Diagonal => 'D',
            TraceDirection::Up => 'U',
            TraceDirection::Left => 'L',
        }
    }
}

impl std::fmt::Display for TraceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceDirection::None => write!(f, "none"),
            TraceDirection::Diagonal => write!(f, "diagonal"),
            TraceDirection::Up => write!(f, "up"),
            TraceDirection::Left => write!(f, "left"),
        }
    }
}

/// Writes a score grid with right-aligned columns.
///
/// `suffix` is written after each cell and may be used to annotate it.
pub(crate) fn write_score_grid(
    f: &mut std::fmt::Formatter<'_>,
    scores: &Array2<Score>,
    suffix: impl Fn(AlignmentMatrixIndex) -> char,
) -> std::fmt::Result {
    let (rows, columns) = scores.dim();
    let mut score_column_widths = vec![1; columns];
    for row in 0..rows {
        for (column, score_column_width) in score_column_widths.iter_mut().enumerate() {
            let width = scores[[row, column]].to_string().len();
            *score_column_width = width.max(*score_column_width);
        }
    }

    for row in 0..rows {
        write!(f, "[ ")?;
        #[allow(clippy::needless_range_loop)]
        for column in 0..columns {
            write!(
                f,
                "{: >width$}{} ",
                scores[[row, column]],
                suffix(AlignmentMatrixIndex::new(row, column)),
                width = score_column_widths[column],
            )?;
        }
        writeln!(f, "]")?;
    }
    Ok(())
}

impl std::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_score_grid(f, &self.scores, |index| self.trace[index].as_char())
    }
}
