//! Guess selection and candidate elimination

mod engine;
pub mod entropy;
mod filter;
mod strategy;

pub use engine::Solver;
pub use entropy::{ScoredGuess, select_guess, select_scored_with};
pub use filter::{filter_candidates, filter_candidates_with};
pub use strategy::SelectionPolicy;
