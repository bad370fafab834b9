//! Benchmark command
//!
//! Plays a game against every given target and aggregates the results.

use super::solve::{GameConfig, play_game};
use crate::core::{FeedbackSource, Word};
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_turns: usize,
    /// Average turns over solved games
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns taken -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run one game per target word
///
/// Shows a progress bar unless `show_progress` is false.
///
/// # Errors
///
/// Returns an error if a game hits a broken solver state.
pub fn run_benchmark<F: FeedbackSource>(
    solver: &Solver<F>,
    candidates: &[Word],
    targets: &[Word],
    config: &GameConfig,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        let record = play_game(solver, candidates, target, config)?;
        let turns = record.turn_count();

        if record.solved {
            solved += 1;
            total_turns += turns;
            min_turns = min_turns.min(turns);
            max_turns = max_turns.max(turns);
            *distribution.entry(turns).or_insert(0) += 1;
        } else {
            failed.push(target.text().to_string());
        }

        pb.set_message(format!("{target}: {turns}"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
