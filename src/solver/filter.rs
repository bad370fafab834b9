//! Candidate elimination
//!
//! Keeps exactly the candidates that would have produced the observed feedback.

use crate::core::{Evaluator, Feedback, FeedbackSource, Word};
use crate::error::SolverError;
use log::debug;

/// Candidates consistent with `feedback` for `guess`
///
/// Returns a new vector in the input's order; the input is untouched.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any candidate's length differs
/// from the guess.
///
/// # Examples
/// ```
/// use wordle_infogain::core::{Feedback, Word};
/// use wordle_infogain::solver::filter_candidates;
///
/// let vocabulary: Vec<Word> = ["abcde", "edcba", "aabbb"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("abcde").unwrap();
/// let feedback = Feedback::evaluate(&guess, &vocabulary[0]).unwrap();
///
/// let remaining = filter_candidates(&vocabulary, &guess, &feedback).unwrap();
/// assert_eq!(remaining, vec![Word::new("abcde").unwrap()]);
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    feedback: &Feedback,
) -> Result<Vec<Word>, SolverError> {
    filter_candidates_with(&Evaluator, candidates, guess, feedback)
}

/// [`filter_candidates`] using the given feedback source
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any candidate's length differs
/// from the guess.
pub fn filter_candidates_with<F: FeedbackSource>(
    source: &F,
    candidates: &[Word],
    guess: &Word,
    feedback: &Feedback,
) -> Result<Vec<Word>, SolverError> {
    let mut remaining = Vec::new();

    for candidate in candidates {
        if source.feedback(guess, candidate)? == *feedback {
            remaining.push(candidate.clone());
        }
    }

    debug!(
        "{guess} {feedback}: {} -> {} candidates",
        candidates.len(),
        remaining.len()
    );

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackCache;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn exact_guess_keeps_only_itself() {
        let vocabulary = words(&["abcde", "edcba", "aabbb"]);
        let guess = Word::new("abcde").unwrap();
        let feedback = Feedback::evaluate(&guess, &vocabulary[0]).unwrap();

        assert!(feedback.is_solved());
        let remaining = filter_candidates(&vocabulary, &guess, &feedback).unwrap();
        assert_eq!(remaining, words(&["abcde"]));
    }

    #[test]
    fn keeps_consistent_candidates_in_order() {
        let candidates = words(&["irate", "crate", "grate", "slate", "plate"]);
        let guess = Word::new("crane").unwrap();
        let target = Word::new("grate").unwrap();
        let feedback = Feedback::evaluate(&guess, &target).unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback).unwrap();

        // IRATE and GRATE both give -GG-G against CRANE
        assert_eq!(remaining, words(&["irate", "grate"]));
    }

    #[test]
    fn target_survives_its_own_feedback() {
        let candidates = words(&["speed", "erase", "robot", "floor", "geese", "those"]);
        let guess = Word::new("eerie").unwrap();

        for target in &candidates {
            let feedback = Feedback::evaluate(&guess, target).unwrap();
            let remaining = filter_candidates(&candidates, &guess, &feedback).unwrap();
            assert!(remaining.contains(target));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let candidates = words(&["irate", "crate", "grate", "slate", "plate"]);
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::from_str("-GG-G").unwrap();

        let once = filter_candidates(&candidates, &guess, &feedback).unwrap();
        let twice = filter_candidates(&once, &guess, &feedback).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let candidates = words(&["irate", "crate", "grate"]);
        let guess = Word::new("zzzzz").unwrap();
        let feedback = Feedback::all_correct(5);

        assert!(
            filter_candidates(&candidates, &guess, &feedback)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn length_mismatch_propagates() {
        let candidates = words(&["crane", "cranes"]);
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::all_correct(5);

        assert!(matches!(
            filter_candidates(&candidates, &guess, &feedback),
            Err(SolverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn cached_source_gives_same_result() {
        let candidates = words(&["irate", "crate", "grate", "slate", "plate"]);
        let guess = Word::new("trace").unwrap();
        let feedback = Feedback::evaluate(&guess, &candidates[3]).unwrap();
        let cache = FeedbackCache::new();

        assert_eq!(
            filter_candidates_with(&cache, &candidates, &guess, &feedback).unwrap(),
            filter_candidates(&candidates, &guess, &feedback).unwrap()
        );
    }
}
