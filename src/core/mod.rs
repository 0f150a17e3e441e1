//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear properties.

mod scoring;
mod word;

pub use scoring::{LetterStatus, score};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
