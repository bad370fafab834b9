//! Word analysis command
//!
//! Reports how well a single guess splits a candidate set.

use crate::core::{FeedbackSource, Word};
use crate::solver::Solver;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub groups: usize,
    pub total_candidates: usize,
    pub in_vocabulary: bool,
}

/// Analyze the entropy of a word against a set of candidates
///
/// The word need not be in the vocabulary, only the right length.
///
/// # Errors
///
/// Returns an error if the word is not a valid word or its length differs
/// from the candidates'.
pub fn analyze_word<F: FeedbackSource>(
    word: &str,
    solver: &Solver<F>,
    candidates: &[Word],
) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    if candidates.is_empty() {
        bail!("no candidates to analyze against");
    }

    let metrics = solver
        .metrics(&guess, candidates)
        .with_context(|| format!("analyzing '{guess}'"))?;

    Ok(AnalysisResult {
        in_vocabulary: solver.vocabulary().contains(&guess),
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        groups: metrics.groups,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SelectionPolicy;
    use crate::wordlists::{WORDS, words_from_slice};

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&WORDS[..100]).unwrap();
        let solver = Solver::new(&words, SelectionPolicy::FullVocabulary);

        let result = analyze_word(WORDS[0], &solver, &words).unwrap();

        assert_eq!(result.word, WORDS[0]);
        assert!(result.in_vocabulary);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.groups >= 2);
        assert_eq!(result.total_candidates, 100);
    }

    #[test]
    fn analyze_word_outside_vocabulary() {
        let words = words_from_slice(&WORDS[..100]).unwrap();
        let solver = Solver::new(&words, SelectionPolicy::FullVocabulary);

        let result = analyze_word("zzzzz", &solver, &words).unwrap();
        assert!(!result.in_vocabulary);
    }

    #[test]
    fn analyze_invalid_words() {
        let words = words_from_slice(&WORDS[..100]).unwrap();
        let solver = Solver::new(&words, SelectionPolicy::FullVocabulary);

        assert!(analyze_word("cr4ne", &solver, &words).is_err());
        assert!(analyze_word("cranes", &solver, &words).is_err());
        assert!(analyze_word("crane", &solver, &[]).is_err());
    }

    #[test]
    fn entropy_properties() {
        let words = words_from_slice(&WORDS[..100]).unwrap();
        let solver = Solver::new(&words, SelectionPolicy::FullVocabulary);

        let result = analyze_word("slate", &solver, &words).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (words.len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= words.len() as f64);
        assert!(result.max_partition <= words.len());
    }
}
