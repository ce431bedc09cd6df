//! Error types for the game core

use super::WordError;
use thiserror::Error;

/// Reason a candidate word list was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateListError {
    #[error("no candidate words supplied")]
    Empty,
    #[error("candidate {word:?} is not a valid word: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("candidate {word:?} has {actual} letters, expected {expected}")]
    MismatchedLength {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors surfaced by the game core
///
/// All of them are deterministic: the same inputs always reproduce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Startup configuration error, never recoverable
    #[error("invalid candidate list: {0}")]
    InvalidCandidateList(#[from] CandidateListError),

    /// A guess reached the evaluator with the wrong number of letters
    #[error("guess has {actual} letters, expected {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// A guess was submitted after the game was won or lost
    #[error("the game has already ended")]
    GameAlreadyEnded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_errors_wrap_into_game_error() {
        let err: GameError = CandidateListError::Empty.into();
        assert_eq!(
            err,
            GameError::InvalidCandidateList(CandidateListError::Empty)
        );
        assert_eq!(
            err.to_string(),
            "invalid candidate list: no candidate words supplied"
        );
    }

    #[test]
    fn mismatched_length_message_names_the_word() {
        let err = CandidateListError::MismatchedLength {
            word: "CAT".to_string(),
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "candidate \"CAT\" has 3 letters, expected 5");
    }
}
