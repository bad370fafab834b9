//! Word lists
//!
//! The default vocabulary is embedded in the binary; custom lists are loaded
//! from files. Either way the loader guarantees a non-empty list of words
//! that all have the same length.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, ensure_uniform_length, load_from_file, sample, words_from_slice};
