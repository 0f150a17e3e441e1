//! Game state machine
//!
//! A `Game` owns one play-through: the hidden target, the six board rows, the
//! in-progress letter buffer, the keyboard color map, and the clue sets that
//! feed hard mode. Operations return outcomes instead of publishing state;
//! the caller renders whatever it polls from the accessors.

use crate::core::{LetterStatus, Word, score};
use crate::game::guess::GuessRow;
use crate::game::hard_mode::{self, HardModeViolation};
use crate::game::oracle::Dictionary;
use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed number of allowed attempts per game
pub const MAX_TRIES: usize = 6;

/// Win toast by the row the game was won on (index 0 = first try)
pub const WIN_MESSAGES: [&str; MAX_TRIES] = [
    "Genius!",
    "Magnificent!",
    "Impressive!",
    "Good enough!",
    "A close one!",
    "Phew!",
];

/// Result of an accepted guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess matched the target; the game is over
    Win { row: usize, message: &'static str },
    /// The guess was scored and the game continues
    Continue { row: usize },
    /// The last attempt was used without matching; the game is over
    Loss { message: String },
}

/// Recoverable rejection of a guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Fewer letters entered than the board width (defensive; the UI
    /// disables submission before this is reachable)
    Incomplete { entered: usize, needed: usize },
    /// The dictionary oracle does not know the word; the row is preserved
    NotInWordList,
    /// Hard mode rejected the guess; the row is preserved
    HardMode(HardModeViolation),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { entered, needed } => {
                write!(f, "Not enough letters ({entered}/{needed})")
            }
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::HardMode(violation) => write!(f, "{violation}"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HardMode(violation) => Some(violation),
            _ => None,
        }
    }
}

/// One play-through of the guessing game
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    hard_mode: bool,
    rows: Vec<GuessRow>,
    current: String,
    try_index: usize,
    key_colors: FxHashMap<char, LetterStatus>,
    matched: Vec<char>,
    misplaced: Vec<char>,
    placed: Vec<Option<char>>,
    invalid_attempts: Vec<u32>,
    in_play: bool,
    game_over: bool,
    won: bool,
}

impl Game {
    /// Start a fresh game against `target`
    ///
    /// The board width follows the target's length; the attempt count is
    /// always [`MAX_TRIES`].
    #[must_use]
    pub fn new(target: Word, hard_mode: bool) -> Self {
        let width = target.len();
        let rows = (0..MAX_TRIES).map(|i| GuessRow::new(i, width)).collect();
        let key_colors = ('a'..='z').map(|c| (c, LetterStatus::Unused)).collect();

        Self {
            target,
            hard_mode,
            rows,
            current: String::new(),
            try_index: 0,
            key_colors,
            matched: Vec::new(),
            misplaced: Vec::new(),
            placed: vec![None; width],
            invalid_attempts: vec![0; MAX_TRIES],
            in_play: true,
            game_over: false,
            won: false,
        }
    }

    /// The hidden target word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Board width in letters
    #[must_use]
    pub fn width(&self) -> usize {
        self.target.len()
    }

    /// Whether hard mode is on for this game
    #[must_use]
    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// All six board rows, scored or not
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// The board rows submitted and scored so far
    #[must_use]
    pub fn scored_rows(&self) -> &[GuessRow] {
        &self.rows[..self.try_index]
    }

    /// Index of the active row; equals [`MAX_TRIES`] once exhausted
    #[must_use]
    pub fn try_index(&self) -> usize {
        self.try_index
    }

    /// The in-progress letter buffer
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current
    }

    /// Whether the game still accepts guesses
    #[must_use]
    pub fn in_play(&self) -> bool {
        self.in_play
    }

    /// Whether a terminal state (win or loss) has been reached
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether the game ended in a win
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Whether any input has been made this game
    #[must_use]
    pub fn game_started(&self) -> bool {
        !self.current.is_empty() || self.try_index > 0
    }

    /// Whether letter keys should be ignored (game over or row full)
    #[must_use]
    pub fn keys_disabled(&self) -> bool {
        !self.in_play || self.current.len() == self.width()
    }

    /// Best-known keyboard status for a letter
    #[must_use]
    pub fn key_color(&self, letter: char) -> LetterStatus {
        self.key_colors
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// How many rejected-word submissions the row has seen (shake signal)
    #[must_use]
    pub fn invalid_attempts(&self, row: usize) -> u32 {
        self.invalid_attempts.get(row).copied().unwrap_or(0)
    }

    /// Append a letter to the in-progress row
    ///
    /// No-op (not an error) when the game is over, the row is full, or the
    /// character is not an ASCII letter.
    pub fn add_letter(&mut self, letter: char) {
        if self.keys_disabled() || !letter.is_ascii_alphabetic() {
            return;
        }
        self.current.push(letter.to_ascii_lowercase());
        self.sync_active_row();
    }

    /// Remove the last letter of the in-progress row; no-op when empty
    pub fn remove_letter(&mut self) {
        if !self.in_play || self.current.is_empty() {
            return;
        }
        self.current.pop();
        self.sync_active_row();
    }

    /// Submit the in-progress row
    ///
    /// A guess equal to the target wins immediately without consulting the
    /// dictionary (themed targets need not be dictionary words). Otherwise
    /// the dictionary is asked first, then hard mode when enabled, then the
    /// row is scored and the turn advances. Losing the last attempt reveals
    /// the target in the returned message.
    ///
    /// # Errors
    /// Returns a [`GuessError`] without advancing the turn or clearing the
    /// buffer, so the player can edit and resubmit.
    pub fn submit_guess(
        &mut self,
        dictionary: &dyn Dictionary,
    ) -> Result<SubmitOutcome, GuessError> {
        if self.current.len() != self.width() {
            return Err(GuessError::Incomplete {
                entered: self.current.len(),
                needed: self.width(),
            });
        }

        if self.current == self.target.text() {
            let row = self.accept_current();
            self.game_over = true;
            self.in_play = false;
            self.won = true;
            return Ok(SubmitOutcome::Win {
                row,
                message: WIN_MESSAGES[row.min(MAX_TRIES - 1)],
            });
        }

        if !dictionary.is_valid_word(&self.current) {
            self.invalid_attempts[self.try_index] += 1;
            return Err(GuessError::NotInWordList);
        }

        if self.hard_mode {
            hard_mode::check(&self.current, &self.placed, &self.misplaced)
                .map_err(GuessError::HardMode)?;
        }

        let row = self.accept_current();
        if self.try_index == MAX_TRIES {
            self.game_over = true;
            self.in_play = false;
            return Ok(SubmitOutcome::Loss {
                message: format!(
                    "You lose, now get off my property. The correct word is {}.",
                    self.target.text().to_uppercase()
                ),
            });
        }

        Ok(SubmitOutcome::Continue { row })
    }

    /// Score the buffer into the active row and advance the turn
    fn accept_current(&mut self) -> usize {
        let row = self.try_index;
        let statuses = score(self.current.as_bytes(), &self.target);

        self.apply_statuses(&statuses);
        self.rows[row].set_letters(&self.current);
        self.rows[row].mark_scored(statuses);

        self.current.clear();
        self.try_index += 1;
        row
    }

    /// Fold a scored row into the keyboard map and the hard-mode clue sets
    ///
    /// Keyboard updates use `max()`, so a key only ever climbs the
    /// Unused < Absent < Misplaced < Correct ladder.
    fn apply_statuses(&mut self, statuses: &[LetterStatus]) {
        let letters: Vec<char> = self.current.chars().collect();

        for (i, (&status, &letter)) in statuses.iter().zip(&letters).enumerate() {
            match status {
                LetterStatus::Correct => {
                    self.placed[i] = Some(letter);
                    if !self.matched.contains(&letter) {
                        self.matched.push(letter);
                    }
                    self.misplaced.retain(|&c| c != letter);
                }
                LetterStatus::Misplaced => {
                    if !self.matched.contains(&letter) && !self.misplaced.contains(&letter) {
                        self.misplaced.push(letter);
                    }
                }
                LetterStatus::Absent | LetterStatus::Unused => {}
            }
        }

        for (&status, &letter) in statuses.iter().zip(&letters) {
            let promoted = match status {
                LetterStatus::Correct => LetterStatus::Correct,
                LetterStatus::Misplaced => LetterStatus::Misplaced,
                LetterStatus::Absent | LetterStatus::Unused => LetterStatus::Absent,
            };
            let entry = self
                .key_colors
                .entry(letter)
                .or_insert(LetterStatus::Unused);
            *entry = (*entry).max(promoted);
        }
    }

    fn sync_active_row(&mut self) {
        if self.try_index < MAX_TRIES {
            let text = self.current.clone();
            self.rows[self.try_index].set_letters(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Misplaced, Unused};
    use crate::game::oracle::{AcceptAll, WordListDictionary};

    fn game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap(), false)
    }

    fn hard_game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap(), true)
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    fn submit(game: &mut Game, word: &str) -> Result<SubmitOutcome, GuessError> {
        type_word(game, word);
        game.submit_guess(&AcceptAll)
    }

    #[test]
    fn new_game_is_reset() {
        let g = game("crane");
        assert_eq!(g.try_index(), 0);
        assert!(g.in_play());
        assert!(!g.is_over());
        assert!(!g.game_started());
        assert_eq!(g.current_word(), "");
        assert_eq!(g.rows().len(), MAX_TRIES);
        for letter in 'a'..='z' {
            assert_eq!(g.key_color(letter), Unused);
        }
    }

    #[test]
    fn add_letter_fills_active_row() {
        let mut g = game("crane");
        g.add_letter('S');
        g.add_letter('l');
        assert_eq!(g.current_word(), "sl");
        assert_eq!(g.rows()[0].letters(), &['s', 'l', ' ', ' ', ' ']);
        assert!(g.game_started());
    }

    #[test]
    fn add_letter_ignores_overflow_and_non_letters() {
        let mut g = game("crane");
        type_word(&mut g, "slate");
        assert!(g.keys_disabled());
        g.add_letter('x');
        g.add_letter('1');
        assert_eq!(g.current_word(), "slate");
    }

    #[test]
    fn remove_letter_edits_buffer() {
        let mut g = game("crane");
        type_word(&mut g, "sla");
        g.remove_letter();
        assert_eq!(g.current_word(), "sl");
        g.remove_letter();
        g.remove_letter();
        assert_eq!(g.current_word(), "");
        g.remove_letter(); // no-op when empty
        assert_eq!(g.current_word(), "");
    }

    #[test]
    fn submit_incomplete_guess_rejected() {
        let mut g = game("crane");
        type_word(&mut g, "sla");
        let err = g.submit_guess(&AcceptAll).unwrap_err();
        assert_eq!(
            err,
            GuessError::Incomplete {
                entered: 3,
                needed: 5
            }
        );
        assert_eq!(g.current_word(), "sla");
        assert_eq!(g.try_index(), 0);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut g = game("crane");
        let outcome = submit(&mut g, "crane").unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Win {
                row: 0,
                message: "Genius!"
            }
        );
        assert!(g.is_over());
        assert!(!g.in_play());
        assert!(g.has_won());
        assert_eq!(g.try_index(), 1);
        assert_eq!(g.current_word(), "");
        assert_eq!(g.rows()[0].statuses(), &[Correct; 5]);
    }

    #[test]
    fn win_message_follows_row() {
        let mut g = game("crane");
        assert!(matches!(
            submit(&mut g, "slate"),
            Ok(SubmitOutcome::Continue { row: 0 })
        ));
        assert!(matches!(
            submit(&mut g, "bribe"),
            Ok(SubmitOutcome::Continue { row: 1 })
        ));
        let outcome = submit(&mut g, "crane").unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Win {
                row: 2,
                message: "Impressive!"
            }
        );
    }

    #[test]
    fn winning_target_bypasses_dictionary() {
        // Themed targets are not dictionary words
        let dict = WordListDictionary::new(&[Word::new("crane").unwrap()]);
        let mut g = game("anime");
        type_word(&mut g, "anime");
        assert!(matches!(
            g.submit_guess(&dict),
            Ok(SubmitOutcome::Win { row: 0, .. })
        ));
    }

    #[test]
    fn invalid_word_preserves_row_and_signals_shake() {
        let dict = WordListDictionary::new(&[Word::new("slate").unwrap()]);
        let mut g = game("crane");
        type_word(&mut g, "zzzzz");
        let err = g.submit_guess(&dict).unwrap_err();
        assert_eq!(err, GuessError::NotInWordList);
        assert_eq!(err.to_string(), "Not in word list");

        // Buffer and turn untouched, shake counter bumped
        assert_eq!(g.current_word(), "zzzzz");
        assert_eq!(g.try_index(), 0);
        assert_eq!(g.invalid_attempts(0), 1);
        assert!(g.in_play());

        // Player edits the row and resubmits
        for _ in 0..5 {
            g.remove_letter();
        }
        type_word(&mut g, "slate");
        assert!(matches!(
            g.submit_guess(&dict),
            Ok(SubmitOutcome::Continue { row: 0 })
        ));
        assert_eq!(g.invalid_attempts(0), 1);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut g = game("crane");
        for (i, word) in ["slate", "bribe", "proud", "might", "shelf", "dough"]
            .iter()
            .enumerate()
        {
            let outcome = submit(&mut g, word).unwrap();
            if i < 5 {
                assert_eq!(outcome, SubmitOutcome::Continue { row: i });
            } else {
                let SubmitOutcome::Loss { message } = outcome else {
                    panic!("expected loss, got {outcome:?}");
                };
                assert!(message.contains("CRANE"));
            }
        }
        assert_eq!(g.try_index(), MAX_TRIES);
        assert!(g.is_over());
        assert!(!g.in_play());
        assert!(!g.has_won());
    }

    #[test]
    fn submission_after_game_over_rejected() {
        let mut g = game("crane");
        submit(&mut g, "crane").unwrap();
        // Buffer is empty and letter keys are dead
        g.add_letter('s');
        assert_eq!(g.current_word(), "");
        assert!(matches!(
            g.submit_guess(&AcceptAll),
            Err(GuessError::Incomplete { .. })
        ));
    }

    #[test]
    fn key_colors_aggregate_across_guesses() {
        let mut g = game("crane");
        submit(&mut g, "slate").unwrap();
        assert_eq!(g.key_color('s'), Absent);
        assert_eq!(g.key_color('l'), Absent);
        assert_eq!(g.key_color('a'), Correct);
        assert_eq!(g.key_color('t'), Absent);
        assert_eq!(g.key_color('e'), Correct);
        assert_eq!(g.key_color('z'), Unused);

        submit(&mut g, "racer").unwrap();
        assert_eq!(g.key_color('r'), Misplaced);
        assert_eq!(g.key_color('c'), Misplaced);
    }

    #[test]
    fn key_color_never_downgrades() {
        let mut g = game("crane");
        submit(&mut g, "crane").unwrap();
        assert_eq!(g.key_color('c'), Correct);

        // A later game continues from reset state; within one game, feed a
        // guess that scores the matched letter absent elsewhere
        let mut g = game("bobby");
        submit(&mut g, "boast").unwrap();
        assert_eq!(g.key_color('b'), Correct);
        submit(&mut g, "abbey").unwrap();
        // b stayed correct despite one absent occurrence in abbey
        assert_eq!(g.key_color('b'), Correct);
    }

    #[test]
    fn misplaced_promotes_to_matched() {
        let mut g = game("crane");
        submit(&mut g, "racer").unwrap();
        assert_eq!(g.key_color('r'), Misplaced);
        submit(&mut g, "crone").unwrap();
        // r pinned at position 1 now
        assert_eq!(g.key_color('r'), Correct);
    }

    #[test]
    fn hard_mode_enforces_confirmed_positions() {
        let mut g = hard_game("crane");
        submit(&mut g, "crone").unwrap(); // c, n, e confirmed (r too)
        type_word(&mut g, "slate");
        let err = g.submit_guess(&AcceptAll).unwrap_err();
        assert_eq!(
            err,
            GuessError::HardMode(HardModeViolation::MustContainAtPosition {
                letter: 'c',
                position: 0
            })
        );
        assert_eq!(err.to_string(), "1st letter must be 'C'.");
        // Row preserved for editing
        assert_eq!(g.current_word(), "slate");
        assert_eq!(g.try_index(), 1);
    }

    #[test]
    fn hard_mode_enforces_misplaced_letters() {
        let mut g = hard_game("crane");
        submit(&mut g, "radar").unwrap(); // r and a misplaced, nothing pinned
        type_word(&mut g, "moist");
        let err = g.submit_guess(&AcceptAll).unwrap_err();
        assert_eq!(
            err,
            GuessError::HardMode(HardModeViolation::MustContainLetter { letter: 'r' })
        );
    }

    #[test]
    fn hard_mode_accepts_conforming_guess() {
        let mut g = hard_game("crane");
        submit(&mut g, "crone").unwrap();
        let outcome = submit(&mut g, "crane").unwrap();
        assert!(matches!(outcome, SubmitOutcome::Win { row: 1, .. }));
    }

    #[test]
    fn variable_width_game() {
        let mut g = game("naruto");
        assert_eq!(g.width(), 6);
        assert_eq!(g.rows()[0].letters().len(), 6);
        let outcome = submit(&mut g, "nakano").unwrap();
        assert_eq!(outcome, SubmitOutcome::Continue { row: 0 });
        assert_eq!(
            g.rows()[0].statuses(),
            &[Correct, Correct, Absent, Absent, Absent, Correct]
        );
    }
}
