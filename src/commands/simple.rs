//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback the real game showed, narrows the
//! candidates and repeats.

use crate::core::{Feedback, FeedbackSource, Word};
use crate::solver::Solver;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

enum Input {
    Feedback(Feedback),
    Undo,
    NewGame,
    Quit,
}

/// Run the interactive solver over `input` / `output`
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver reaches a broken state.
pub fn run_simple<F, R, W>(
    solver: &Solver<F>,
    candidates: &[Word],
    mut input: R,
    mut output: W,
) -> Result<()>
where
    F: FeedbackSource,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{}", "Word-guessing solver - interactive mode".bright_cyan().bold())?;
    writeln!(output, "After each guess, enter the feedback pattern:")?;
    writeln!(output, "  G = correct position, Y = wrong position, - = not in word")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'\n")?;

    // Each entry is the candidate set before a turn; the last one is current
    let mut history: Vec<Vec<Word>> = vec![candidates.to_vec()];

    loop {
        let current = history.last().context("candidate history is empty")?;
        let turn = history.len();

        let suggestion = if current.is_empty() {
            writeln!(
                output,
                "{}",
                "No candidates remain! The feedback may be wrong; try 'undo'.".red()
            )?;
            None
        } else {
            let scored = solver.next_guess(current)?;
            writeln!(
                output,
                "Turn {turn}: {} candidates, suggest {} ({:.3} bits)",
                current.len(),
                scored.word.text().to_uppercase().bright_yellow().bold(),
                scored.entropy
            )?;
            if current.len() <= 10 {
                let listed: Vec<&str> = current.iter().map(Word::text).collect();
                writeln!(output, "  remaining: {}", listed.join(", "))?;
            }
            Some(scored.word.clone())
        };

        let Some(line) = read_input(&mut input, &mut output)? else {
            return Ok(());
        };

        match parse_input(&line) {
            Some(Input::Quit) => return Ok(()),
            Some(Input::NewGame) => {
                history.truncate(1);
                writeln!(output, "New game started.")?;
            }
            Some(Input::Undo) => {
                if history.len() > 1 {
                    history.pop();
                } else {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Some(Input::Feedback(feedback)) => {
                let Some(guess) = suggestion else {
                    writeln!(output, "Nothing to filter; use 'undo' or 'new'.")?;
                    continue;
                };
                if feedback.len() != guess.len() {
                    writeln!(output, "Feedback must have {} letters.", guess.len())?;
                    continue;
                }
                if feedback.is_solved() {
                    writeln!(
                        output,
                        "{}",
                        format!("Solved in {turn} turns: {}", guess.text().to_uppercase())
                            .green()
                            .bold()
                    )?;
                    history.truncate(1);
                    continue;
                }
                let next = solver.observe(current, &guess, &feedback)?;
                history.push(next);
            }
            None => writeln!(output, "Invalid input; use G/Y/- or a command.")?,
        }
    }
}

fn parse_input(line: &str) -> Option<Input> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Input::Quit),
        "new" | "n" => Some(Input::NewGame),
        "undo" | "u" => Some(Input::Undo),
        _ => Feedback::from_str(line).map(Input::Feedback),
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "Feedback: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
