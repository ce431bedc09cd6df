//! Per-letter feedback for a scored guess
//!
//! Each position of a guess is classified as:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter is in the secret, elsewhere
//! - Absent (gray): letter is not available in the secret

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    pub(crate) const fn from_letters(letters: Vec<LetterFeedback>) -> Self {
        Self(letters)
    }

    /// Feedback entries in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Feedback for the letter at `position`, if in range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterFeedback> {
        self.0.get(position).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
