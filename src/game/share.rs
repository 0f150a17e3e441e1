//! Shareable result grid
//!
//! Renders a finished (or in-progress) game as the familiar plain-text emoji
//! grid: a header with the lifetime game count and the tries used, then one
//! glyph line per scored row. Pure formatting; handing the text to an OS
//! share mechanism is the caller's business.

use crate::game::guess::GuessRow;
use crate::game::state::MAX_TRIES;

/// Header title for the share text
pub const SHARE_TITLE: &str = "Wordle";

/// Format the share text for a set of scored rows
///
/// `games` is the lifetime completed-game counter from the statistics
/// record. The tries slot in the header is left blank for a lost game.
///
/// # Examples
/// ```
/// use wordle_tui::core::Word;
/// use wordle_tui::game::{AcceptAll, Game, share_text};
///
/// let mut game = Game::new(Word::new("crane").unwrap(), false);
/// for ch in "crane".chars() {
///     game.add_letter(ch);
/// }
/// game.submit_guess(&AcceptAll).unwrap();
///
/// let text = share_text(12, game.scored_rows(), game.has_won());
/// assert_eq!(text, "Wordle 12 1/6\n🟩🟩🟩🟩🟩\n");
/// ```
#[must_use]
pub fn share_text(games: u32, scored_rows: &[GuessRow], won: bool) -> String {
    let tries = if won {
        scored_rows.len().to_string()
    } else {
        String::new()
    };

    let mut out = format!("{SHARE_TITLE} {games} {tries}/{MAX_TRIES}\n");
    for row in scored_rows {
        out.push_str(&row.glyphs());
        out.push('\n');
    }
    out
}
