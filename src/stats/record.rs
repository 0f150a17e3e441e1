//! Aggregate game statistics
//!
//! A single persisted record: totals, streaks, and the distribution of how
//! many guesses wins took. Only `update` mutates it, once per completed game.

use crate::game::MAX_TRIES;
use serde::{Deserialize, Serialize};

/// Lifetime win/loss statistics for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistic {
    /// Completed games, win or loss
    pub games: u32,
    /// Games won
    pub wins: u32,
    /// Current consecutive-win count
    pub streak: u32,
    /// Best streak ever reached
    pub max_streak: u32,
    /// Wins by row the game was won on (index 0 = first try)
    pub frequencies: [u32; MAX_TRIES],
}

impl Default for Statistic {
    fn default() -> Self {
        Self {
            games: 0,
            wins: 0,
            streak: 0,
            max_streak: 0,
            frequencies: [0; MAX_TRIES],
        }
    }
}

impl Statistic {
    /// Record one completed game
    ///
    /// `row` is the 0-based row a win landed on; ignored (and normally
    /// `None`) for a loss.
    pub fn update(&mut self, win: bool, row: Option<usize>) {
        self.games += 1;
        if win {
            self.wins += 1;
            if let Some(row) = row
                && row < MAX_TRIES
            {
                self.frequencies[row] += 1;
            }
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Percentage of games won, rounded down; zero before any games
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games == 0 {
            0
        } else {
            100 * self.wins / self.games
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_win_tracks_streak_and_frequency() {
        let mut stat = Statistic::default();
        stat.update(true, Some(2));
        stat.update(true, Some(2));
        stat.update(true, Some(0));

        assert_eq!(stat.games, 3);
        assert_eq!(stat.wins, 3);
        assert_eq!(stat.streak, 3);
        assert_eq!(stat.max_streak, 3);
        assert_eq!(stat.frequencies, [1, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn update_loss_resets_streak_keeps_max() {
        let mut stat = Statistic::default();
        stat.update(true, Some(3));
        stat.update(true, Some(3));
        stat.update(false, None);

        assert_eq!(stat.games, 3);
        assert_eq!(stat.wins, 2);
        assert_eq!(stat.streak, 0);
        assert_eq!(stat.max_streak, 2);

        stat.update(true, Some(1));
        assert_eq!(stat.streak, 1);
        assert_eq!(stat.max_streak, 2);
    }

    #[test]
    fn loss_increments_games_only() {
        let mut stat = Statistic::default();
        stat.update(false, None);
        assert_eq!(stat.games, 1);
        assert_eq!(stat.wins, 0);
        assert_eq!(stat.frequencies, [0; MAX_TRIES]);
    }

    #[test]
    fn win_percentage_rounds_down() {
        let mut stat = Statistic::default();
        assert_eq!(stat.win_percentage(), 0);
        stat.update(true, Some(0));
        stat.update(true, Some(0));
        stat.update(false, None);
        assert_eq!(stat.win_percentage(), 66);
    }

    #[test]
    fn serde_round_trip() {
        let mut stat = Statistic::default();
        stat.update(true, Some(4));
        let json = serde_json::to_string(&stat).unwrap();
        let back: Statistic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stat);
    }

    #[test]
    fn serde_missing_fields_default() {
        let stat: Statistic = serde_json::from_str("{\"games\": 5}").unwrap();
        assert_eq!(stat.games, 5);
        assert_eq!(stat.wins, 0);
        assert_eq!(stat.frequencies, [0; MAX_TRIES]);
    }
}
