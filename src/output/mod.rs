//! Terminal output formatting
//!
//! Display utilities for the plain-terminal game and stats printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_stats};
