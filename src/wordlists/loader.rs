//! Word list loading utilities
//!
//! Loads vocabularies from files or embedded constants, validates that every
//! word has the same length, and draws random subsets.

use crate::core::{Word, WordError};
use log::info;
use rand::Rng;
use rand::seq::index;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a usable vocabulary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid word '{text}'")]
    InvalidWord {
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },

    #[error("word '{word}' has {found} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("word list is empty")]
    Empty,
}

/// Load words from a file, one per line
///
/// Blank lines are skipped. Any other invalid line is an error, as is a list
/// whose words differ in length.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, contains an invalid word,
/// is empty, or mixes word lengths.
///
/// # Examples
/// ```no_run
/// use wordle_infogain::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content)?;
    ensure_uniform_length(&words)?;

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to words
///
/// # Errors
///
/// Returns `LoadError` on an invalid entry, an empty slice or mixed lengths.
///
/// # Examples
/// ```
/// use wordle_infogain::wordlists::{WORDS, words_from_slice};
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, LoadError> {
    let words = slice
        .iter()
        .enumerate()
        .map(|(i, &text)| parse_word(i + 1, text))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_uniform_length(&words)?;
    Ok(words)
}

/// Check that `words` is non-empty and all the same length
///
/// Returns that length.
///
/// # Errors
///
/// Returns `LoadError::Empty` or `LoadError::MixedLengths`.
pub fn ensure_uniform_length(words: &[Word]) -> Result<usize, LoadError> {
    let first = words.first().ok_or(LoadError::Empty)?;
    let expected = first.len();

    if let Some(odd) = words.iter().find(|w| w.len() != expected) {
        return Err(LoadError::MixedLengths {
            word: odd.text().to_string(),
            expected,
            found: odd.len(),
        });
    }

    Ok(expected)
}

/// Random subset of `words`, keeping their original order
///
/// Returns everything if `size` is at least `words.len()`.
pub fn sample<R: Rng + ?Sized>(words: &[Word], size: usize, rng: &mut R) -> Vec<Word> {
    if size >= words.len() {
        return words.to_vec();
    }

    let mut picked = index::sample(rng, words.len(), size).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| words[i].clone()).collect()
}

fn parse_lines(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_word(i + 1, line.trim()))
        .collect()
}

fn parse_word(line: usize, text: &str) -> Result<Word, LoadError> {
    Word::new(text).map_err(|source| LoadError::InvalidWord {
        line,
        text: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        assert!(matches!(
            words_from_slice(&["crane", "sl4te"]),
            Err(LoadError::InvalidWord { line: 2, .. })
        ));
    }

    #[test]
    fn words_from_slice_rejects_mixed_lengths() {
        assert!(matches!(
            words_from_slice(&["crane", "toolong", "slate"]),
            Err(LoadError::MixedLengths {
                expected: 5,
                found: 7,
                ..
            })
        ));
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(matches!(words_from_slice(&[]), Err(LoadError::Empty)));
    }

    #[test]
    fn uniform_length_of_other_sizes() {
        let words = words_from_slice(&["aabbcc", "ababbc"]).unwrap();
        assert_eq!(ensure_uniform_length(&words).unwrap(), 6);
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let path = std::env::temp_dir().join(format!("wordlist-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "crane\n\n  Slate  \nirate").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_missing_file() {
        assert!(matches!(
            load_from_file("/definitely/not/here.txt"),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn sample_keeps_order_and_size() {
        let words = words_from_slice(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = sample(&words, 3, &mut rng);
        assert_eq!(picked.len(), 3);

        let positions: Vec<usize> = picked
            .iter()
            .map(|w| words.iter().position(|x| x == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let words = words_from_slice(crate::wordlists::WORDS).unwrap();

        let a = sample(&words, 20, &mut StdRng::seed_from_u64(42));
        let b = sample(&words, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_larger_than_list_returns_all() {
        let words = words_from_slice(&["aaaaa", "bbbbb"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample(&words, 10, &mut rng), words);
    }
}
