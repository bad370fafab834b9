//! Main solver interface

use super::SelectionPolicy;
use super::entropy::{GuessMetrics, ScoredGuess, calculate_metrics, select_scored_with};
use super::filter::filter_candidates_with;
use crate::core::{Evaluator, Feedback, FeedbackSource, Word};
use crate::error::SolverError;

/// Bundles the vocabulary, a selection policy and a feedback source
///
/// Holds no game state: the candidate set is passed in and returned by the
/// caller every turn, so one solver can serve many games.
pub struct Solver<'a, F: FeedbackSource = Evaluator> {
    vocabulary: &'a [Word],
    policy: SelectionPolicy,
    source: F,
}

impl<'a> Solver<'a, Evaluator> {
    /// Create a solver that evaluates feedback directly
    #[must_use]
    pub const fn new(vocabulary: &'a [Word], policy: SelectionPolicy) -> Self {
        Self::with_source(vocabulary, policy, Evaluator)
    }
}

impl<'a, F: FeedbackSource> Solver<'a, F> {
    /// Create a solver with a custom feedback source (e.g. a shared cache)
    pub const fn with_source(vocabulary: &'a [Word], policy: SelectionPolicy, source: F) -> Self {
        Self {
            vocabulary,
            policy,
            source,
        }
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub const fn source(&self) -> &F {
        &self.source
    }

    /// Best next guess for the given candidates
    ///
    /// # Errors
    /// `EmptyCandidates` / `EmptyPool` on a broken game state,
    /// `LengthMismatch` on a mixed-length vocabulary.
    pub fn next_guess<'c>(&self, candidates: &'c [Word]) -> Result<ScoredGuess<'c>, SolverError>
    where
        'a: 'c,
    {
        select_scored_with(&self.source, candidates, self.vocabulary, self.policy)
    }

    /// Narrow `candidates` by an observed guess and its feedback
    ///
    /// # Errors
    /// `LengthMismatch` if a candidate's length differs from the guess.
    pub fn observe(
        &self,
        candidates: &[Word],
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Vec<Word>, SolverError> {
        filter_candidates_with(&self.source, candidates, guess, feedback)
    }

    /// Feedback of `guess` against a known target
    ///
    /// # Errors
    /// `LengthMismatch` if the words differ in length.
    pub fn feedback(&self, guess: &Word, target: &Word) -> Result<Feedback, SolverError> {
        self.source.feedback(guess, target)
    }

    /// Partition statistics of `guess` against `candidates`
    ///
    /// # Errors
    /// `LengthMismatch` if a candidate's length differs from the guess.
    pub fn metrics(&self, guess: &Word, candidates: &[Word]) -> Result<GuessMetrics, SolverError> {
        calculate_metrics(&self.source, guess, candidates)
    }
}
