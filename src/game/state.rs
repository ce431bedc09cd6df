//! Game state machine
//!
//! ```text
//! InProgress --guess == secret--------------------> Won
//! InProgress --guess != secret, attempts == max---> Lost
//! InProgress --guess != secret, attempts <  max---> InProgress
//! ```
//!
//! Won and Lost are terminal: the history is frozen and further submissions
//! fail with `GameError::GameAlreadyEnded`.

use crate::core::{Feedback, GameError, Word, evaluate};
use serde::Serialize;
use std::num::NonZeroUsize;

/// Progress of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Payload announced when a game ends
///
/// Serializes as `{"result":"win"}` or `{"result":"loss","secretWord":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss {
        #[serde(rename = "secretWord")]
        secret_word: String,
    },
}

/// History, secret and status of one game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    max_attempts: NonZeroUsize,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word, max_attempts: NonZeroUsize) -> Self {
        Self {
            secret,
            max_attempts,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess, record it and advance the state machine
    ///
    /// # Errors
    /// - `GameError::GameAlreadyEnded` once the game is won or lost
    /// - `GameError::InvalidGuessLength` if the guess length differs from the secret
    pub fn submit_guess(&mut self, guess: Word) -> Result<&GuessRecord, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyEnded);
        }

        let feedback = evaluate(&guess, &self.secret)?;
        let solved = feedback.is_perfect();

        self.history.push(GuessRecord { guess, feedback });

        if solved {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.max_attempts.get() {
            self.status = GameStatus::Lost;
        }

        let attempt = self.history.len();
        let record = &self.history[attempt - 1];
        log::debug!(
            "Attempt {attempt}/{}: {} {}",
            self.max_attempts,
            record.guess,
            record.feedback
        );

        Ok(record)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses in the order they were submitted
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.get() - self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// The secret, but only once the game is over
    #[must_use]
    pub fn secret_if_revealed(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.secret)
    }

    /// The end-of-game payload, if the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(Outcome::Win),
            GameStatus::Lost => Some(Outcome::Loss {
                secret_word: self.secret.text().to_string(),
            }),
        }
    }
}
