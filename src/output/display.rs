//! Display functions for the plain-terminal game

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, format_keyboard_row, format_row};
use crate::game::{Game, MAX_TRIES};
use crate::stats::Statistic;
use colored::Colorize;

/// Print the board: scored rows plus the in-progress row
pub fn print_board(game: &Game) {
    println!();
    for row in game.rows() {
        if row.is_scored() || row.index() == game.try_index() {
            println!("  {}", format_row(row));
        }
    }
    println!();
}

/// Print the on-screen keyboard with key colors
pub fn print_keyboard(game: &Game) {
    for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let indent = " ".repeat(2 + i * 2);
        println!("{indent}{}", format_keyboard_row(game, keys));
    }
    println!();
}

/// Print the statistics summary and guess distribution
///
/// `highlight` marks the row a just-finished win landed on.
pub fn print_stats(stat: &Statistic, highlight: Option<usize>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "\n   Played: {}   Win %: {}   Streak: {}   Max streak: {}",
        stat.games.to_string().bright_yellow().bold(),
        stat.win_percentage().to_string().bright_yellow().bold(),
        stat.streak.to_string().bright_yellow().bold(),
        stat.max_streak.to_string().bright_yellow().bold(),
    );

    println!("\n {}", "GUESS DISTRIBUTION".bright_cyan().bold());
    let max_count = stat.frequencies.iter().copied().max().unwrap_or(0);
    for (row, &count) in stat.frequencies.iter().enumerate().take(MAX_TRIES) {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count.max(1)), 20);
        let bar = if highlight == Some(row) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count}", row + 1);
    }
    println!();
}
