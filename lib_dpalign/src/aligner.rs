use log::{debug, info};
use serde::Serialize;

use crate::{
    alignment_configuration::{AlignmentMode, ScoringScheme},
    alignment_matrix::AlignmentMatrix,
    alignment_result::{
        AlignmentResult, FinalAlignment,
        step_log::{StepLog, StepRecorder},
    },
    backtrack::backtrack,
    config::EngineConfig,
    error::{Error, Result},
    request::{AlignmentRequest, AlignmentTask, SequencePair},
};

/// The outcome of one request, serialised either as the alignment result or as an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AlignmentResponse {
    Success(AlignmentResult),
    Failure(AlignmentFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentFailure {
    pub error: String,
}

/// Fills the alignment matrix and backtracks it, reporting each filled cell to `recorder`.
pub fn align_with_recorder(
    sequences: &SequencePair,
    scoring: ScoringScheme,
    mode: AlignmentMode,
    recorder: &mut impl StepRecorder,
) -> Result<(AlignmentMatrix, FinalAlignment)> {
    let seq1 = sequences.seq1().as_bytes();
    let seq2 = sequences.seq2().as_bytes();

    let mut matrix = AlignmentMatrix::new(scoring, mode, seq1.len(), seq2.len());
    matrix.fill(seq1, seq2, recorder)?;
    let final_alignment = backtrack(&matrix, seq1, seq2)?;

    Ok((matrix, final_alignment))
}

/// Aligns the sequences and records a snapshot of the score matrix for every filled cell.
pub fn align(
    sequences: &SequencePair,
    scoring: ScoringScheme,
    mode: AlignmentMode,
) -> Result<AlignmentResult> {
    let mut step_log = StepLog::new();
    let (matrix, final_alignment) = align_with_recorder(sequences, scoring, mode, &mut step_log)?;
    debug!(
        "Recorded {} steps, final alignment has {} columns",
        step_log.len(),
        final_alignment.len()
    );

    Ok(AlignmentResult {
        steps: step_log.into_steps(),
        final_alignment,
        score: matrix.terminal_score(),
        mode,
    })
}

pub fn align_task(task: &AlignmentTask) -> Result<AlignmentResult> {
    align(&task.sequences, task.scoring, task.mode)
}

/// Decodes, validates and aligns one JSON request.
///
/// Any failure is turned into [`AlignmentResponse::Failure`], so no partial result is ever returned.
pub fn align_request(input: &str, config: &EngineConfig) -> AlignmentResponse {
    AlignmentRequest::from_json(input)
        .and_then(|request| align_parsed_request(request, config))
        .into()
}

pub fn align_parsed_request(
    request: AlignmentRequest,
    config: &EngineConfig,
) -> Result<AlignmentResult> {
    let task = request.into_task(config)?;
    info!(
        "Aligning sequences of lengths {} and {} in {} mode",
        task.sequences.seq1().len(),
        task.sequences.seq2().len(),
        task.mode
    );
    align_task(&task)
}

impl AlignmentResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Result<AlignmentResult>> for AlignmentResponse {
    fn from(result: Result<AlignmentResult>) -> Self {
        match result {
            Ok(result) => Self::Success(result),
            Err(error) => Self::from(error),
        }
    }
}

impl From<Error> for AlignmentResponse {
    fn from(error: Error) -> Self {
        debug!("Request failed: {error}");
        Self::Failure(AlignmentFailure {
            error: error.to_string(),
        })
    }
}
