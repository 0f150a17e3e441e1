//! Dictionary oracle
//!
//! The engine never implements word lookup itself; it asks a `Dictionary`
//! whether a candidate is a real word. The stock implementation is backed by
//! the guessable word list, and `AcceptAll` stands in when playing lenient
//! games or custom lists without a matching dictionary.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Answers "is this string a valid word?"
pub trait Dictionary {
    /// Check whether `candidate` (lowercase) is an accepted word
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// Dictionary backed by an explicit word list
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a word list
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}

/// Dictionary that accepts every candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_valid_word(&self, _candidate: &str) -> bool {
        true
    }
}
