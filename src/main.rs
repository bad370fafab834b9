//! Word-guessing solver - CLI
//!
//! Picks guesses by expected information gain, either over the whole
//! vocabulary or over the words still possible.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_infogain::{
    commands::{GameConfig, analyze_word, pick_target, play_game, run_benchmark, run_simple},
    core::{DEFAULT_CACHE_CAPACITY, FeedbackCache, FeedbackSource, Word},
    output::{print_analysis_result, print_benchmark_result, print_game_record},
    solver::{SelectionPolicy, Solver},
    wordlists::{self, WORDS, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_infogain",
    about = "Word-guessing solver driven by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess pool: 'full' (whole vocabulary) or 'candidates' (hard mode)
    #[arg(short, long, global = true, value_enum, default_value_t = SelectionPolicy::FullVocabulary)]
    policy: SelectionPolicy,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Use a random subset of this many words as the vocabulary
    #[arg(long, global = true)]
    sample: Option<usize>,

    /// Seed for target selection and sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Memoize feedback across turns and games
    #[arg(long, global = true)]
    cache: bool,

    /// Most (guess, target) pairs the feedback cache keeps
    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter the feedback your game shows (default)
    Simple,

    /// Solve a target word (random if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Turn budget
        #[arg(short = 't', long, default_value = "6")]
        max_turns: usize,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        detail: bool,
    },

    /// Analyze the entropy of a specific word against the vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play many random targets and report statistics
    Benchmark {
        /// Number of random targets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Turn budget per game
        #[arg(short = 't', long, default_value = "6")]
        max_turns: usize,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_vocabulary(cli: &Cli, rng: &mut StdRng) -> Result<Vec<Word>> {
    let words = match &cli.wordlist {
        Some(path) => wordlists::load_from_file(path)?,
        None => words_from_slice(WORDS).context("embedded word list is invalid")?,
    };

    let words = match cli.sample {
        Some(size) => wordlists::sample(&words, size, rng),
        None => words,
    };
    wordlists::ensure_uniform_length(&words)?;

    info!("vocabulary: {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let vocabulary = load_vocabulary(&cli, &mut rng)?;

    if cli.cache {
        let cache = FeedbackCache::with_capacity(cli.cache_capacity);
        let solver = Solver::with_source(&vocabulary, cli.policy, &cache);
        let result = dispatch(&cli, &solver, &mut rng);
        info!(
            "feedback cache holds {} of at most {} pairs",
            solver.source().len(),
            solver.source().capacity()
        );
        result
    } else {
        let solver = Solver::new(&vocabulary, cli.policy);
        dispatch(&cli, &solver, &mut rng)
    }
}

fn dispatch<F: FeedbackSource>(cli: &Cli, solver: &Solver<F>, rng: &mut StdRng) -> Result<()> {
    let vocabulary = solver.vocabulary();
    info!("guess pool: {}", solver.policy());

    match cli.command.as_ref().unwrap_or(&Commands::Simple) {
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(solver, vocabulary, stdin.lock(), io::stdout())
        }
        Commands::Solve {
            word,
            max_turns,
            first_word,
            detail,
        } => {
            let target = match word {
                Some(text) => Word::new(text.as_str()).context("invalid target word")?,
                None => pick_target(vocabulary, rng)?.clone(),
            };
            let config = game_config(*max_turns, first_word.as_deref())?;

            let record = play_game(solver, vocabulary, &target, &config)?;
            print_game_record(&record, *detail);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(word, solver, vocabulary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            max_turns,
            first_word,
        } => {
            let config = game_config(*max_turns, first_word.as_deref())?;
            let targets = wordlists::sample(vocabulary, *count, rng);

            println!("Running benchmark on {} random words...", targets.len());
            let result = run_benchmark(solver, vocabulary, &targets, &config, true)?;
            print_benchmark_result(&result, *max_turns);
            Ok(())
        }
    }
}

fn game_config(max_turns: usize, first_word: Option<&str>) -> Result<GameConfig> {
    let config = GameConfig::new(max_turns);
    match first_word {
        Some(text) => Ok(config.with_first_word(
            Word::new(text).with_context(|| format!("invalid first word '{text}'"))?,
        )),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_cache_is_opt_in() {
        let cli = Cli::try_parse_from(["wordle_infogain", "solve", "crane"]).unwrap();
        assert!(!cli.cache);
        assert_eq!(cli.cache_capacity, DEFAULT_CACHE_CAPACITY);

        let cli =
            Cli::try_parse_from(["wordle_infogain", "--cache", "--cache-capacity", "1000"]).unwrap();
        assert!(cli.cache);
        assert_eq!(cli.cache_capacity, 1000);
    }

    #[test]
    fn policy_defaults_to_full_vocabulary() {
        let cli = Cli::try_parse_from(["wordle_infogain"]).unwrap();
        assert_eq!(cli.policy, SelectionPolicy::FullVocabulary);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["wordle_infogain", "--policy", "hard"]).unwrap();
        assert_eq!(cli.policy, SelectionPolicy::CandidatesOnly);
    }
}
