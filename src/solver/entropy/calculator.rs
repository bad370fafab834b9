//! Shannon entropy of the feedback a guess induces
//!
//! Given a guess and the remaining candidates, every candidate is a possible
//! target. Grouping candidates by the feedback they would produce gives the
//! outcome partition; its entropy is the expected information gain in bits.

use crate::core::{Evaluator, Feedback, FeedbackSource, Word};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Summary of how well a guess splits the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Size of the largest outcome group (worst case)
    pub max_partition: usize,
    /// Number of distinct feedback outcomes
    pub groups: usize,
}

/// Group `candidates` by the feedback `guess` would receive against each
///
/// Group sizes always sum to `candidates.len()`.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if a candidate's length differs from
/// the guess.
pub fn outcome_partition<'c, F: FeedbackSource>(
    source: &F,
    guess: &Word,
    candidates: &'c [Word],
) -> Result<FxHashMap<Feedback, Vec<&'c Word>>, SolverError> {
    let mut groups: FxHashMap<Feedback, Vec<&Word>> = FxHashMap::default();

    for candidate in candidates {
        let feedback = source.feedback(guess, candidate)?;
        groups.entry(feedback).or_default().push(candidate);
    }

    Ok(groups)
}

/// Expected information gain of `guess` against `candidates`, in bits
///
/// Returns 0.0 for an empty candidate set.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if a candidate's length differs from
/// the guess.
///
/// # Examples
/// ```
/// use wordle_infogain::core::Word;
/// use wordle_infogain::solver::entropy::expected_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
///
/// // Two equally likely outcomes: one bit
/// let bits = expected_entropy(&guess, &candidates).unwrap();
/// assert!((bits - 1.0).abs() < 1e-9);
/// ```
pub fn expected_entropy(guess: &Word, candidates: &[Word]) -> Result<f64, SolverError> {
    expected_entropy_with(&Evaluator, guess, candidates)
}

/// [`expected_entropy`] using the given feedback source
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if a candidate's length differs from
/// the guess.
pub fn expected_entropy_with<F: FeedbackSource>(
    source: &F,
    guess: &Word,
    candidates: &[Word],
) -> Result<f64, SolverError> {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(source.feedback(guess, candidate)?).or_insert(0) += 1;
    }

    Ok(shannon_entropy(counts.into_values()))
}

/// Shannon entropy of a distribution given by group sizes
///
/// H = -Σ p * log₂(p), with p = size / total
///
/// Sizes are summed in sorted order, so any two partitions with the same
/// multiset of sizes score bit-for-bit equal. Zero sizes are ignored.
///
/// # Examples
/// ```
/// use wordle_infogain::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy([25, 25, 25, 25]) - 2.0).abs() < 1e-9);
/// assert_eq!(shannon_entropy([10]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(group_sizes: impl IntoIterator<Item = usize>) -> f64 {
    let mut sizes: Vec<usize> = group_sizes.into_iter().filter(|&c| c > 0).collect();
    sizes.sort_unstable();

    let total = sizes.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // Every term is >= 0; a single group yields -0.0
    entropy.abs()
}

/// Entropy plus the partition shape of a guess
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if a candidate's length differs from
/// the guess.
pub fn calculate_metrics<F: FeedbackSource>(
    source: &F,
    guess: &Word,
    candidates: &[Word],
) -> Result<GuessMetrics, SolverError> {
    let partition = outcome_partition(source, guess, candidates)?;
    let sizes: Vec<usize> = partition.values().map(Vec::len).collect();
    let total = candidates.len() as f64;

    let expected_remaining = if candidates.is_empty() {
        0.0
    } else {
        sizes
            .iter()
            .map(|&size| (size as f64 / total) * size as f64)
            .sum()
    };

    Ok(GuessMetrics {
        entropy: shannon_entropy(sizes.iter().copied()),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
        groups: sizes.len(),
    })
}
