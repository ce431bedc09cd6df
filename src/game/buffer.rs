//! In-progress guess entry
//!
//! The buffer is deliberately permissive: keystrokes that cannot be used are
//! dropped silently instead of producing errors.

use crate::core::Word;

/// Letters typed so far for the next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    letters: String,
    capacity: usize,
}

impl InputBuffer {
    /// Create an empty buffer that holds at most `capacity` letters
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an ASCII letter (stored uppercase) if there is room
    ///
    /// Returns whether the buffer changed.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || self.is_full() {
            return false;
        }
        self.letters.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last letter, if any
    ///
    /// Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        self.letters.pop().is_some()
    }

    /// The buffered letters as a guess, once the buffer is full
    ///
    /// Leaves the buffer untouched either way.
    #[must_use]
    pub fn try_submit(&self) -> Option<Word> {
        if self.is_full() {
            Word::new(&self.letters).ok()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
