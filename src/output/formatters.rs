//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Game, GuessRow};
use colored::{ColoredString, Colorize};

/// Keyboard rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Color a single letter cell by its classification
#[must_use]
pub fn paint_letter(letter: char, status: LetterStatus) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => cell.black().on_green(),
        LetterStatus::Misplaced => cell.black().on_yellow(),
        LetterStatus::Absent => cell.white().on_bright_black(),
        LetterStatus::Unused => cell.normal(),
    }
}

/// Format a scored (or in-progress) board row as colored cells
#[must_use]
pub fn format_row(row: &GuessRow) -> String {
    row.letters()
        .iter()
        .zip(row.statuses())
        .map(|(&letter, &status)| paint_letter(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one keyboard line with the game's key colors
#[must_use]
pub fn format_keyboard_row(game: &Game, keys: &str) -> String {
    keys.chars()
        .map(|key| paint_letter(key, game.key_color(key)).to_string())
        .collect::<Vec<_>>()
        .join("")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::AcceptAll;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let all: String = KEYBOARD_ROWS.concat();
        assert_eq!(all.len(), 26);
        for letter in 'a'..='z' {
            assert!(all.contains(letter));
        }
    }

    #[test]
    fn format_row_emits_every_cell() {
        colored::control::set_override(false);
        let mut game = Game::new(Word::new("crane").unwrap(), false);
        for ch in "slate".chars() {
            game.add_letter(ch);
        }
        game.submit_guess(&AcceptAll).unwrap();

        let line = format_row(&game.rows()[0]);
        assert!(line.contains('S'));
        assert!(line.contains('E'));
        colored::control::unset_override();
    }
}
