//! Game driver
//!
//! Plays one game against a known target: select, evaluate, filter, repeat
//! until the feedback is all-correct or the turn budget runs out.

use crate::core::{Feedback, FeedbackSource, Word};
use crate::solver::Solver;
use anyhow::{Context, Result, bail};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Per-game settings
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Turn budget
    pub max_turns: usize,
    /// Forced opening guess
    pub first_word: Option<Word>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            first_word: None,
        }
    }

    #[must_use]
    pub fn with_first_word(mut self, word: Word) -> Self {
        self.first_word = Some(word);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Outcome of a game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: Word,
    pub solved: bool,
    pub turns: Vec<TurnRecord>,
}

impl GameRecord {
    /// Turns played
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// A single turn of a game
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information gain of the guess, in bits
    pub entropy: f64,
}

impl TurnRecord {
    /// Information actually gained this turn, in bits
    #[must_use]
    pub fn actual_bits(&self) -> f64 {
        if self.candidates_after == 0 {
            return 0.0;
        }
        (self.candidates_before as f64 / self.candidates_after as f64).log2()
    }
}

/// Play a game against `target`, starting from `candidates`
///
/// # Errors
///
/// Returns an error if the target is not among the candidates, the turn
/// budget is zero, or the solver reports a broken state.
pub fn play_game<F: FeedbackSource>(
    solver: &Solver<F>,
    candidates: &[Word],
    target: &Word,
    config: &GameConfig,
) -> Result<GameRecord> {
    if config.max_turns == 0 {
        bail!("turn budget must be at least 1");
    }
    if !candidates.contains(target) {
        bail!("target '{target}' is not in the candidate list");
    }

    let mut candidates = candidates.to_vec();
    let mut turns = Vec::new();

    for turn in 1..=config.max_turns {
        let candidates_before = candidates.len();

        let (guess, entropy) = match (&config.first_word, turn) {
            (Some(word), 1) => {
                let metrics = solver
                    .metrics(word, &candidates)
                    .context("scoring the opening guess")?;
                (word.clone(), metrics.entropy)
            }
            _ => {
                let scored = solver
                    .next_guess(&candidates)
                    .with_context(|| format!("selecting guess for turn {turn}"))?;
                (scored.word.clone(), scored.entropy)
            }
        };

        let feedback = solver.feedback(&guess, target)?;
        candidates = solver.observe(&candidates, &guess, &feedback)?;

        info!(
            "turn {turn}: {guess} {feedback} ({entropy:.3} bits), {candidates_before} -> {} candidates",
            candidates.len()
        );

        let solved = feedback.is_solved();
        turns.push(TurnRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            entropy,
        });

        if solved {
            return Ok(GameRecord {
                target: target.clone(),
                solved: true,
                turns,
            });
        }
    }

    Ok(GameRecord {
        target: target.clone(),
        solved: false,
        turns,
    })
}

/// Pick a random target
///
/// # Errors
///
/// Returns an error if `words` is empty.
pub fn pick_target<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Result<&'a Word> {
    words
        .choose(rng)
        .context("cannot pick a target from an empty word list")
}
