//! Word representation
//!
//! A Word is an immutable sequence of uppercase ASCII letters. Secret words and
//! guesses share this type; the game enforces their common length elsewhere.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase word used as a secret or as a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for text that cannot form a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters, found {0:?}")]
    NonAlphabetic(char),
}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("shake").unwrap();
    /// assert_eq!(word.text(), "SHAKE");
    ///
    /// assert!(Word::new("sh4ke").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator as the pool of letters still available to credit.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
