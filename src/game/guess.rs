//! A single board row
//!
//! All rows are created empty when a game starts. The active row is rewritten
//! letter-by-letter as the player types, then scored exactly once on a
//! successful submit and never mutated again.

use crate::core::LetterStatus;

/// One guess row: letters plus their per-position classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    index: usize,
    letters: Vec<char>,
    statuses: Vec<LetterStatus>,
    scored: bool,
}

impl GuessRow {
    /// Create an empty row of the given width
    #[must_use]
    pub fn new(index: usize, width: usize) -> Self {
        Self {
            index,
            letters: vec![' '; width],
            statuses: vec![LetterStatus::Unused; width],
            scored: false,
        }
    }

    /// Row position on the board (0-based)
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The letters typed so far, space-padded to the board width
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Per-position classification; all `Unused` until the row is scored
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Whether this row has been submitted and scored
    #[inline]
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Rewrite the row from the in-progress buffer, space-padding the tail
    pub(crate) fn set_letters(&mut self, text: &str) {
        for (i, slot) in self.letters.iter_mut().enumerate() {
            *slot = text.chars().nth(i).unwrap_or(' ');
        }
    }

    /// Freeze the row with its final classification
    pub(crate) fn mark_scored(&mut self, statuses: Vec<LetterStatus>) {
        debug_assert_eq!(statuses.len(), self.letters.len());
        self.statuses = statuses;
        self.scored = true;
    }

    /// Render the row as share glyphs, one symbol per letter
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.statuses
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Misplaced => '🟨',
                LetterStatus::Absent | LetterStatus::Unused => '⬜',
            })
            .collect()
    }
}
