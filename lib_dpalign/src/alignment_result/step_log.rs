use ndarray::Array2;
use serde::{Serialize, Serializer};

use crate::{
    alignment_configuration::Score,
    alignment_matrix::{TraceDirection, index::AlignmentMatrixIndex, write_score_grid},
};

/// Receives every inner cell of the alignment matrix right after it was filled.
pub trait StepRecorder {
    fn record(
        &mut self,
        scores: &Array2<Score>,
        index: AlignmentMatrixIndex,
        direction: TraceDirection,
    );
}

/// Discards all steps.
impl StepRecorder for () {
    fn record(&mut self, _: &Array2<Score>, _: AlignmentMatrixIndex, _: TraceDirection) {}
}

/// An immutable snapshot of the score matrix taken right after filling one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    #[serde(serialize_with = "serialize_rows")]
    matrix: Array2<Score>,
    highlight: AlignmentMatrixIndex,
    from: TraceDirection,
}

/// An append-only log of [`StepRecord`]s in fill order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<StepRecord>,
}

impl StepRecord {
    pub fn matrix(&self) -> &Array2<Score> {
        &self.matrix
    }

    /// The cell that was filled in this step.
    pub fn highlight(&self) -> AlignmentMatrixIndex {
        self.highlight
    }

    pub fn direction(&self) -> TraceDirection {
        self.from
    }

    pub fn score(&self) -> Score {
        self.matrix[self.highlight]
    }
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}

impl StepRecorder for StepLog {
    fn record(
        &mut self,
        scores: &Array2<Score>,
        index: AlignmentMatrixIndex,
        direction: TraceDirection,
    ) {
        self.steps.push(StepRecord {
            matrix: scores.clone(),
            highlight: index,
            from: direction,
        });
    }
}

fn serialize_rows<S: Serializer>(
    matrix: &Array2<Score>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(matrix.rows().into_iter().map(|row| row.to_vec()))
}

impl std::fmt::Display for StepRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Cell {} = {} from {}",
            self.highlight,
            self.score(),
            self.from
        )?;
        write_score_grid(f, &self.matrix, |index| {
            if index == self.highlight { '*' } else { ' ' }
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::{StepLog, StepRecorder};
    use crate::alignment_matrix::{TraceDirection, index::AlignmentMatrixIndex};

    #[test]
    fn snapshots_are_independent() {
        let mut scores = array![[0i64, -1], [-1, 0]];
        let mut step_log = StepLog::new();

        step_log.record(&scores, AlignmentMatrixIndex::new(1, 1), TraceDirection::Diagonal);
        scores[[1, 1]] = 7;
        step_log.record(&scores, AlignmentMatrixIndex::new(1, 1), TraceDirection::Up);

        let steps = step_log.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].score(), 0);
        assert_eq!(steps[0].direction(), TraceDirection::Diagonal);
        assert_eq!(steps[1].score(), 7);
        assert_eq!(steps[1].direction(), TraceDirection::Up);
    }

    #[test]
    fn serialises_as_nested_rows() {
        let mut step_log = StepLog::new();
        step_log.record(
            &array![[0i64, -2, -4], [-2, 1, -1]],
            AlignmentMatrixIndex::new(1, 2),
            TraceDirection::Left,
        );

        let json = serde_json::to_string(&step_log.into_steps()[0]).unwrap();
        assert_eq!(
            json,
            r#"{"matrix":[[0,-2,-4],[-2,1,-1]],"highlight":{"row":1,"col":2},"from":"left"}"#
        );
    }

    #[test]
    fn display_marks_highlight() {
        let mut step_log = StepLog::new();
        step_log.record(
            &array![[0i64, -1], [-1, 1]],
            AlignmentMatrixIndex::new(1, 1),
            TraceDirection::Diagonal,
        );

        assert_eq!(
            step_log.iter().next().unwrap().to_string(),
            "Cell (1, 1) = 1 from diagonal\n[  0  -1  ]\n[ -1   1* ]\n"
        );
    }
}
