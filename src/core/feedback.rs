//! Per-letter feedback and its computation
//!
//! Feedback for a guess is one [`Classification`] per guess position:
//! - `Correct`: letter matches the target at this position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`:  no unmatched occurrence of the letter remains
//!
//! Duplicate letters are resolved by multiset accounting: all exact matches
//! are credited first, then misplaced letters consume what is left.

use super::Word;
use crate::error::SolverError;
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter has no remaining occurrence in the target
    Absent,
}

impl Classification {
    /// Parse from a single character
    ///
    /// Accepts `G`/`g`/`2`/🟩, `Y`/`y`/`1`/🟨 and `-`/`_`/`.`/`0`/⬜/⬛.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Letter form used by `Display`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for console display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one classification per position
///
/// Two feedbacks are equal iff every position matches, which makes this
/// usable directly as a key when partitioning candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// All-`Correct` feedback of the given length
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        Self(vec![Classification::Correct; len])
    }

    /// Compute the feedback `guess` receives when `target` is hidden
    ///
    /// # Algorithm
    /// 1. Every position starts `Absent`
    /// 2. First pass: exact matches become `Correct` and consume that target letter
    /// 3. Second pass: remaining positions become `Present` if an unconsumed
    ///    occurrence of the letter is left, consuming one
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    pub fn evaluate(guess: &Word, target: &Word) -> Result<Self, SolverError> {
        if guess.len() != target.len() {
            return Err(SolverError::LengthMismatch {
                guess: guess.text().to_string(),
                target: target.text().to_string(),
            });
        }

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut result = vec![Classification::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact matches
        for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                result[i] = Classification::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, &g) in guess_letters.iter().enumerate() {
            if result[i] == Classification::Absent
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Parse from a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Returns `None` on an empty string or an unknown character.
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let classifications: Option<Vec<Classification>> =
            s.chars().map(Classification::from_char).collect();
        classifications
            .filter(|c| !c.is_empty())
            .map(Self)
    }

    /// The classification sequence
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Emoji rendering, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
