//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, GameRecord};
use colored::Colorize;

/// Print a played game
pub fn print_game_record(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates:  {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            println!("  Expected:    {:.3} bits", turn.entropy);
            if turn.candidates_after > 0 {
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    turn.actual_bits(),
                    turn.candidates_before as f64 / turn.candidates_after as f64
                );
            }
        }
    }

    println!();
    if record.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", record.turn_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", record.turn_count())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Outcomes:    {} groups, largest {}",
        result.groups, result.max_partition
    );
    if !result.in_vocabulary {
        println!("   {}", "(not in the vocabulary)".bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_turns: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for turns in 1..=max_turns {
            if let Some(&count) = result.distribution.get(&turns) {
                let pct = (count as f64 / result.total_words as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░"
                        .repeat(40_usize.saturating_sub(bar_width))
                        .bright_black()
                );
                println!("   {turns}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        println!("   {}", result.failed.join(", "));
    }
}
