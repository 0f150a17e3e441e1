//! Wordle for the terminal
//!
//! A Wordle-style word guessing game engine with a TUI and a plain CLI mode,
//! hard mode, persistent statistics, and a shareable result grid.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::Word;
//! use wordle_tui::game::{AcceptAll, Game, SubmitOutcome};
//!
//! let mut game = Game::new(Word::new("crane").unwrap(), false);
//! for ch in "crane".chars() {
//!     game.add_letter(ch);
//! }
//! let outcome = game.submit_guess(&AcceptAll).unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Win { row: 0, .. }));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Statistics record and persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
