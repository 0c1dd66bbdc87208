use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::TraceDirection;

pub mod iterators;

/// A cell of the alignment matrix.
///
/// Rows run along `seq2`, columns along `seq1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlignmentMatrixIndex {
    pub row: usize,
    #[serde(rename = "col")]
    pub column: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn is_origin(&self) -> bool {
        self.row == 0 && self.column == 0
    }

    pub fn up_predecessor(&self) -> Option<Self> {
        Some(Self {
            row: self.row.checked_sub(1)?,
            column: self.column,
        })
    }

    pub fn left_predecessor(&self) -> Option<Self> {
        Some(Self {
            row: self.row,
            column: self.column.checked_sub(1)?,
        })
    }

    pub fn diagonal_predecessor(&self) -> Option<Self> {
        Some(Self {
            row: self.row.checked_sub(1)?,
            column: self.column.checked_sub(1)?,
        })
    }

    /// The cell this cell is reached from when following `direction`.
    ///
    /// Returns `None` for [`TraceDirection::None`] and for steps leaving the matrix.
    pub fn predecessor(&self, direction: TraceDirection) -> Option<Self> {
        match direction {
            TraceDirection::None => None,
            TraceDirection::Diagonal => self.diagonal_predecessor(),
            TraceDirection::Up => self.up_predecessor(),
            TraceDirection::Left => self.left_predecessor(),
        }
    }
}

impl Display for AlignmentMatrixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.row, index.column]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.row, index.column]]
    }
}
