//! Feedback sources: direct evaluation and an optional memo layer
//!
//! Everything that needs feedback takes a `&impl FeedbackSource`, so callers
//! decide whether results are memoized and how long a cache lives.

use super::{Feedback, Word};
use crate::error::SolverError;
use log::trace;
use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};

/// Something that can produce feedback for a `(guess, target)` pair
///
/// Implementations must agree with [`Feedback::evaluate`].
pub trait FeedbackSource: Sync {
    /// Feedback `guess` receives against `target`
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the words differ in length.
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Feedback, SolverError>;
}

/// Uncached source: evaluates every request
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl FeedbackSource for Evaluator {
    #[inline]
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Feedback, SolverError> {
        Feedback::evaluate(guess, target)
    }
}

/// Default bound on memoized pairs for [`FeedbackCache::new`]
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 18;

#[derive(Debug, Default)]
struct Entries {
    // guess -> target -> feedback
    rows: FxHashMap<Word, FxHashMap<Word, Feedback>>,
    len: usize,
}

/// Thread-safe, size-bounded memo of `(guess, target) -> feedback`
///
/// Feedback is a pure function of the pair, so one cache may be shared by
/// several games, including concurrently. Once `capacity` pairs are stored,
/// further pairs are evaluated but not remembered; nothing is evicted.
#[derive(Debug)]
pub struct FeedbackCache {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for FeedbackCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl FeedbackCache {
    /// Cache bounded by [`DEFAULT_CACHE_CAPACITY`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` pairs
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of memoized pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized pairs
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.rows.clear();
        entries.len = 0;
    }

    fn remember(&self, guess: &Word, target: &Word, feedback: &Feedback) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len >= self.capacity {
            return;
        }

        let Entries { rows, len } = &mut *entries;
        if !rows.contains_key(guess) {
            rows.insert(guess.clone(), FxHashMap::default());
        }
        if let Some(row) = rows.get_mut(guess)
            && row.insert(target.clone(), feedback.clone()).is_none()
        {
            *len += 1;
        }
    }
}

impl FeedbackSource for FeedbackCache {
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Feedback, SolverError> {
        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .get(guess)
            .and_then(|row| row.get(target))
        {
            return Ok(hit.clone());
        }

        trace!("feedback cache miss: {guess} vs {target}");
        let feedback = Feedback::evaluate(guess, target)?;
        self.remember(guess, target, &feedback);

        Ok(feedback)
    }
}

impl<S: FeedbackSource + ?Sized> FeedbackSource for &S {
    #[inline]
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Feedback, SolverError> {
        (**self).feedback(guess, target)
    }
}
