//! Guess scoring against a target word
//!
//! Scoring is a two-pass, frequency-aware comparison:
//! - First pass marks exact position matches and consumes them from the
//!   target's letter pool.
//! - Second pass marks present-but-misplaced letters from the remaining pool.
//!
//! The left-to-right scan order in both passes decides which occurrences of a
//! repeated letter get credited, so at most `count(L, target)` occurrences of
//! any letter L are ever marked Correct or Misplaced.

use super::Word;

/// Classification of a single letter on the board or keyboard
///
/// The variant order is the keyboard priority order: once a key has reached a
/// status it is never downgraded, so aggregation is a plain `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// No information yet (keyboard only; never produced by scoring)
    #[default]
    Unused,
    /// Letter not in the target, or all its occurrences already credited
    Absent,
    /// Letter in the target but at a different position
    Misplaced,
    /// Letter matches the target at this position
    Correct,
}

/// Score a guess against a target word
///
/// Returns one `LetterStatus` per position. Pure and deterministic; the
/// result never contains `Unused`.
///
/// # Examples
/// ```
/// use wordle_tui::core::{LetterStatus, Word, score};
///
/// let target = Word::new("bonds").unwrap();
/// let result = score(b"books", &target);
///
/// // Only one 'o' in the target, so the second 'o' is absent
/// assert_eq!(
///     result,
///     vec![
///         LetterStatus::Correct,
///         LetterStatus::Correct,
///         LetterStatus::Absent,
///         LetterStatus::Absent,
///         LetterStatus::Correct,
///     ]
/// );
/// ```
///
/// # Panics
/// Debug builds assert that guess and target have equal length.
#[must_use]
pub fn score(guess: &[u8], target: &Word) -> Vec<LetterStatus> {
    debug_assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have equal length"
    );

    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut available = target.char_counts();

    // First pass: exact position matches
    for (i, &letter) in guess.iter().enumerate() {
        if letter == target.char_at(i) {
            result[i] = LetterStatus::Correct;

            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from the remaining pool
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] != LetterStatus::Correct
            && let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            result[i] = LetterStatus::Misplaced;
            *count -= 1;
        }
    }

    result
}
