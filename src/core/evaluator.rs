//! Guess evaluation against the secret word

use super::{Feedback, GameError, LetterFeedback, Word};

/// Score `guess` against `secret`, one feedback entry per letter
///
/// Repeated letters are handled the standard way:
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: left to right, mark present-but-misplaced letters while the
///    pool still holds that letter, everything else is absent
///
/// A letter that occurs once in the secret is therefore credited to at most
/// one position of the guess, preferring the exact match.
///
/// # Errors
/// Returns `GameError::InvalidGuessLength` if the two words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterFeedback::*, Word, evaluate};
///
/// let guess = Word::new("share").unwrap();
/// let secret = Word::new("shake").unwrap();
/// let feedback = evaluate(&guess, &secret).unwrap();
///
/// assert_eq!(feedback.letters(), &[Correct, Correct, Correct, Absent, Correct]);
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Feedback, GameError> {
    if guess.len() != secret.len() {
        return Err(GameError::InvalidGuessLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![LetterFeedback::Absent; guess.len()];
    let mut available = secret.char_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            result[i] = LetterFeedback::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, claimed left to right
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::from_letters(result))
}
