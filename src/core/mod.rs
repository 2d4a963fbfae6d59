//! Core domain types
//!
//! Words, difficulty tiers and guess scoring. Everything here is pure and
//! independent of storage, networking and presentation.

mod difficulty;
mod feedback;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use feedback::{Feedback, KeyboardStatus, LetterFeedback, score};
pub use word::{WORD_LENGTH, Word, WordError};
