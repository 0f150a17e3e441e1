//! Target word selection
//!
//! A `WordSource` hands the game its hidden target. The stock implementation
//! draws uniformly at random from a word list; `FixedSource` pins the target
//! for tests and scripted games.

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Supplies the hidden target word for each new game
pub trait WordSource {
    /// Pick a target; `None` when the source has no words
    fn pick_target(&mut self) -> Option<Word>;
}

/// Uniform random draw from a word list
#[derive(Debug, Clone)]
pub struct RandomSource {
    words: Vec<Word>,
}

impl RandomSource {
    /// Build a source over a word list
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of candidate targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the source has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomSource {
    fn pick_target(&mut self) -> Option<Word> {
        let mut rng = rand::rng();
        self.words.choose(&mut rng).cloned()
    }
}

/// Always hands out the same target
#[derive(Debug, Clone)]
pub struct FixedSource {
    word: Word,
}

impl FixedSource {
    /// Pin the target word
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self { word }
    }
}

impl WordSource for FixedSource {
    fn pick_target(&mut self) -> Option<Word> {
        Some(self.word.clone())
    }
}
