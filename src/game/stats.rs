//! Running totals across the games of one process

use super::Outcome;

/// Win/loss tally and guess distribution
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in `n` guesses (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game that took `attempts` guesses
    pub fn record(&mut self, outcome: &Outcome, attempts: usize) {
        self.total_games += 1;

        if *outcome == Outcome::Win {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    /// Percentage of games won, 0 when nothing has been played
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

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(&Outcome::Win, 3);
        stats.record(&Outcome::Win, 3);
        stats.record(
            &Outcome::Loss {
                secret_word: "SHAKE".to_string(),
            },
            6,
        );

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![0, 0, 0, 2]);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
