//! Command implementations
//!
//! Everything that drives the solver: playing games, analysis, benchmarks and
//! the interactive mode. The solving core itself lives in [`crate::solver`].

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{GameConfig, GameRecord, TurnRecord, pick_target, play_game};
