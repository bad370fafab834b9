//! Guess selection policies
//!
//! Both policies share one scoring routine; they differ only in which words
//! may be guessed.

use crate::core::Word;
use clap::ValueEnum;
use std::fmt;

/// Which words the selector may choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SelectionPolicy {
    /// Score the whole vocabulary, including words already ruled out
    #[default]
    #[value(name = "full", alias = "full-vocabulary")]
    FullVocabulary,
    /// Score only words that could still be the answer ("hard mode")
    #[value(name = "candidates", alias = "hard")]
    CandidatesOnly,
}

impl SelectionPolicy {
    /// The words scored under this policy
    #[must_use]
    pub const fn pool<'a>(self, candidates: &'a [Word], vocabulary: &'a [Word]) -> &'a [Word] {
        match self {
            Self::FullVocabulary => vocabulary,
            Self::CandidatesOnly => candidates,
        }
    }

    /// Short human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullVocabulary => "full-vocabulary",
            Self::CandidatesOnly => "candidates-only",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_follows_policy() {
        let candidates = vec![Word::new("crane").unwrap()];
        let vocabulary = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];

        assert_eq!(
            SelectionPolicy::FullVocabulary.pool(&candidates, &vocabulary).len(),
            2
        );
        assert_eq!(
            SelectionPolicy::CandidatesOnly.pool(&candidates, &vocabulary).len(),
            1
        );
    }

    #[test]
    fn default_is_full_vocabulary() {
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::FullVocabulary);
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!(
            SelectionPolicy::from_str("full", true).unwrap(),
            SelectionPolicy::FullVocabulary
        );
        assert_eq!(
            SelectionPolicy::from_str("hard", true).unwrap(),
            SelectionPolicy::CandidatesOnly
        );
        assert!(SelectionPolicy::from_str("minimax", true).is_err());
    }
}
