//! Error types for the solving core

use thiserror::Error;

/// Failures of the feedback / filter / selection engine.
///
/// Every variant signals a caller bug or a broken game state. None of them is
/// recoverable inside the core, so they are never caught there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Guess and target disagree in length.
    #[error("guess '{guess}' and target '{target}' have different lengths")]
    LengthMismatch { guess: String, target: String },

    /// Guess selection was asked to choose with no candidates left.
    #[error("no candidates remain; the observed feedback is inconsistent with the vocabulary")]
    EmptyCandidates,

    /// Guess selection was given nothing to choose from.
    #[error("the guess pool is empty")]
    EmptyPool,
}
