//! In-memory tallies for one play session
//!
//! Nothing here outlives the process.

use crate::core::MAX_ATTEMPTS;
use crate::engine::{GameStatus, Turn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index n counts wins that took n guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS as usize + 1],
}

impl Statistics {
    /// Tally a turn that ended a game; other turns are ignored
    pub fn record(&mut self, turn: &Turn) {
        match turn.status {
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(turn.attempt as usize) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.total_games += 1,
            GameStatus::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Score};

    fn turn(attempt: u32, status: GameStatus) -> Turn {
        Turn {
            attempt,
            guess: Code::try_from(1234).unwrap(),
            score: Score::NONE,
            status,
        }
    }

    #[test]
    fn record_counts_only_finished_games() {
        let mut stats = Statistics::default();
        stats.record(&turn(1, GameStatus::InProgress));
        stats.record(&turn(3, GameStatus::Won));
        stats.record(&turn(10, GameStatus::Lost));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[3], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_win_rate_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
