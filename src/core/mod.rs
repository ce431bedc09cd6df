//! Core domain types for the game
//!
//! Words, feedback and the guess evaluator. Everything here is pure and
//! independent of any presentation layer.

mod error;
mod evaluator;
mod feedback;
mod word;

pub use error::{CandidateListError, GameError};
pub use evaluator::evaluate;
pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};
