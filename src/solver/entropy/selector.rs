//! Entropy-maximizing guess selection
//!
//! Scores every word of the guess pool against the current candidates and
//! keeps the best. Scoring runs in parallel; the winner is always the first
//! maximal word in pool order.

use super::calculator::expected_entropy_with;
use crate::core::{Evaluator, FeedbackSource, Word};
use crate::error::SolverError;
use crate::solver::SelectionPolicy;
use log::debug;
use rayon::prelude::*;

/// A chosen guess and its expected information gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    /// Entropy in bits; 0.0 when the answer is already known
    pub entropy: f64,
}

/// Select the next guess under `policy`
///
/// - A single remaining candidate is returned immediately.
/// - `FullVocabulary` scores every word of `pool`.
/// - `CandidatesOnly` scores the candidates themselves.
///
/// Ties go to the earliest word in the scored pool.
///
/// # Errors
/// - `SolverError::EmptyCandidates` if `candidates` is empty
/// - `SolverError::EmptyPool` if `pool` is empty
/// - `SolverError::LengthMismatch` if word lengths disagree
///
/// # Examples
/// ```
/// use wordle_infogain::core::Word;
/// use wordle_infogain::solver::{SelectionPolicy, select_guess};
///
/// let pool: Vec<Word> = ["aaaaa", "aeros"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let candidates: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let best = select_guess(&candidates, &pool, SelectionPolicy::FullVocabulary).unwrap();
/// assert_eq!(best.text(), "aeros");
///
/// let hard = select_guess(&candidates, &pool, SelectionPolicy::CandidatesOnly).unwrap();
/// assert!(candidates.contains(hard));
/// ```
pub fn select_guess<'a>(
    candidates: &'a [Word],
    pool: &'a [Word],
    policy: SelectionPolicy,
) -> Result<&'a Word, SolverError> {
    select_scored_with(&Evaluator, candidates, pool, policy).map(|scored| scored.word)
}

/// [`select_guess`] using the given feedback source, also returning the score
///
/// # Errors
/// Same as [`select_guess`].
pub fn select_scored_with<'a, F: FeedbackSource>(
    source: &F,
    candidates: &'a [Word],
    pool: &'a [Word],
    policy: SelectionPolicy,
) -> Result<ScoredGuess<'a>, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidates);
    }
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }

    if let [only] = candidates {
        debug!("single candidate left: {only}");
        return Ok(ScoredGuess {
            word: only,
            entropy: 0.0,
        });
    }

    let best = best_in_pool(source, policy.pool(candidates, pool), candidates)?;
    debug!(
        "{policy}: picked {} ({:.3} bits) for {} candidates",
        best.word,
        best.entropy,
        candidates.len()
    );

    Ok(best)
}

/// Highest-entropy word of a non-empty `pool`, first one on ties
fn best_in_pool<'a, F: FeedbackSource>(
    source: &F,
    pool: &'a [Word],
    candidates: &[Word],
) -> Result<ScoredGuess<'a>, SolverError> {
    let scores: Vec<f64> = pool
        .par_iter()
        .map(|guess| expected_entropy_with(source, guess, candidates))
        .collect::<Result<_, _>>()?;

    let (index, entropy) = scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, score)| match best {
            Some((_, top)) if score.total_cmp(&top).is_le() => best,
            _ => Some((i, score)),
        })
        .ok_or(SolverError::EmptyPool)?;

    Ok(ScoredGuess {
        word: &pool[index],
        entropy,
    })
}
