//! Word lists for the game
//!
//! Embedded answer, dictionary, and themed lists, plus file loading and
//! target selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ANSWERS, EXTENDED, THEMED};
pub use source::{FixedSource, RandomSource, WordSource};

use crate::core::Word;
use loader::words_from_slice;

/// Every word the dictionary oracle accepts: answers plus extended words
#[must_use]
pub fn guessable_words() -> Vec<Word> {
    let mut words = words_from_slice(ANSWERS);
    words.extend(words_from_slice(EXTENDED));
    words
}
