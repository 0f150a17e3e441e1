//! Game engine: state machine, hard mode, dictionary oracle, share grid

mod guess;
mod hard_mode;
mod oracle;
mod share;
mod state;

pub use guess::GuessRow;
pub use hard_mode::{HardModeViolation, ordinal};
pub use oracle::{AcceptAll, Dictionary, WordListDictionary};
pub use share::{SHARE_TITLE, share_text};
pub use state::{Game, GuessError, MAX_TRIES, SubmitOutcome, WIN_MESSAGES};
