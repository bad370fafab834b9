//! Entropy-based guess scoring and selection
//!
//! Implements Shannon entropy over outcome partitions, and the selection
//! routine shared by both guess policies.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, expected_entropy, expected_entropy_with, outcome_partition,
    shannon_entropy,
};
pub use selector::{ScoredGuess, select_guess, select_scored_with};
