use super::AlignmentMatrixIndex;
use crate::alignment_matrix::TraceDirection;

/// An inner cell of the alignment matrix, with the two symbols a diagonal step into it aligns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillCell {
    pub index: AlignmentMatrixIndex,
    /// The symbol of `seq1` in this column and the symbol of `seq2` in this row.
    pub symbols: (u8, u8),
}

/// The inner cells of the alignment matrix of two sequences, in row-major fill order.
///
/// Row `i` belongs to symbol `i - 1` of `seq2`, and column `j` belongs to symbol `j - 1` of `seq1`.
pub struct FillCells<'seq> {
    seq1: &'seq [u8],
    seq2: &'seq [u8],
    position: usize,
}

/// The border cells of an alignment matrix except the origin.
///
/// Row zero comes first, then column zero.
/// Each cell is paired with the gap direction that enters it in a global alignment.
pub struct BorderCells {
    row_cells: usize,
    column_cells: usize,
    position: usize,
}

impl<'seq> FillCells<'seq> {
    pub fn new(seq1: &'seq [u8], seq2: &'seq [u8]) -> Self {
        Self {
            seq1,
            seq2,
            position: 0,
        }
    }

    fn total(&self) -> usize {
        self.seq1.len() * self.seq2.len()
    }
}

impl BorderCells {
    /// `dim` is one past the last row and column.
    pub fn new(dim: AlignmentMatrixIndex) -> Self {
        Self {
            row_cells: dim.column.saturating_sub(1),
            column_cells: dim.row.saturating_sub(1),
            position: 0,
        }
    }
}

impl Iterator for FillCells<'_> {
    type Item = FillCell;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.position.checked_rem(self.seq1.len())?;
        let row = self.position / self.seq1.len();
        let symbols = (*self.seq1.get(column)?, *self.seq2.get(row)?);
        self.position += 1;

        Some(FillCell {
            index: AlignmentMatrixIndex::new(row + 1, column + 1),
            symbols,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillCells<'_> {}

impl Iterator for BorderCells {
    type Item = (AlignmentMatrixIndex, TraceDirection);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        let item = if position < self.row_cells {
            (AlignmentMatrixIndex::new(0, position + 1), TraceDirection::Left)
        } else if position < self.row_cells + self.column_cells {
            (
                AlignmentMatrixIndex::new(position - self.row_cells + 1, 0),
                TraceDirection::Up,
            )
        } else {
            return None;
        };

        self.position += 1;
        Some(item)
    }
}
