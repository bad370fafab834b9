//! Word-guessing game solver
//!
//! Computes per-letter feedback with correct duplicate-letter handling,
//! eliminates candidates that disagree with observed feedback, and picks the
//! next guess by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_infogain::core::{Feedback, Word};
//! use wordle_infogain::solver::{SelectionPolicy, filter_candidates, select_guess};
//!
//! let vocabulary: Vec<Word> = ["crane", "slate", "irate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let target = Word::new("grate").unwrap();
//!
//! let guess = select_guess(&vocabulary, &vocabulary, SelectionPolicy::FullVocabulary).unwrap();
//! let feedback = Feedback::evaluate(guess, &target).unwrap();
//! let remaining = filter_candidates(&vocabulary, guess, &feedback).unwrap();
//!
//! assert!(remaining.contains(&target));
//! ```

// Core domain types
pub mod core;

// Error taxonomy of the solving core
pub mod error;

// Guess selection and candidate elimination
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
