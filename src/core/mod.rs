//! Core domain types
//!
//! Words, per-letter feedback, and the sources that compute feedback.
//! Everything here is pure apart from the opt-in memo cache.

mod cache;
mod feedback;
mod word;

pub use cache::{DEFAULT_CACHE_CAPACITY, Evaluator, FeedbackCache, FeedbackSource};
pub use feedback::{Classification, Feedback};
pub use word::{Word, WordError};
