//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, colored board and
//! keyboard reprinted after every accepted guess.

use crate::game::{Dictionary, Game, MAX_TRIES, SubmitOutcome, share_text};
use crate::output::{print_board, print_keyboard, print_stats};
use crate::stats::StatsStore;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, the word
/// source is empty, or the statistics record cannot be saved.
pub fn run_simple(
    source: &mut dyn WordSource,
    dictionary: &dyn Dictionary,
    store: &dyn StatsStore,
    hard_mode: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Terminal Edition                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden word. After each guess:");
    println!("  {} letter in the right spot", " G ".black().on_green());
    println!("  {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'stats' to show statistics\n");

    let mut stat = store.load();

    loop {
        let target = source.pick_target().ok_or("Word list is empty")?;
        let mut game = Game::new(target, hard_mode);

        println!(
            "New game: {} letters, {MAX_TRIES} tries{}",
            game.width(),
            if hard_mode { ", hard mode" } else { "" }
        );

        while game.in_play() {
            print_board(&game);
            print_keyboard(&game);

            let input = get_user_input("Guess")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "stats" | "s" => {
                    print_stats(&stat, None);
                }
                word => {
                    if word.len() != game.width() {
                        println!(
                            "{}",
                            format!("Guess must be {} letters", game.width()).red()
                        );
                        continue;
                    }

                    // Each line replaces the row wholesale
                    while !game.current_word().is_empty() {
                        game.remove_letter();
                    }
                    for ch in word.chars() {
                        game.add_letter(ch);
                    }

                    match game.submit_guess(dictionary) {
                        Ok(SubmitOutcome::Win { row, message }) => {
                            stat.update(true, Some(row));
                            store.save(&stat).map_err(|e| e.to_string())?;

                            print_board(&game);
                            println!("{}", message.green().bold());
                            println!("\n{}", share_text(stat.games, game.scored_rows(), true));
                            print_stats(&stat, Some(row));
                        }
                        Ok(SubmitOutcome::Loss { message }) => {
                            stat.update(false, None);
                            store.save(&stat).map_err(|e| e.to_string())?;

                            print_board(&game);
                            println!("{}", message.red().bold());
                            println!("\n{}", share_text(stat.games, game.scored_rows(), false));
                            print_stats(&stat, None);
                        }
                        Ok(SubmitOutcome::Continue { .. }) => {}
                        Err(err) => {
                            println!("{}", err.to_string().red());
                        }
                    }
                }
            }
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {}
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
