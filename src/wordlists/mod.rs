//! Candidate word lists
//!
//! Provides the embedded list compiled into the binary and a loader for
//! custom lists. Lists are handed to the game as raw strings; validation
//! happens in `WordSelector`.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordSelector;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_form_a_valid_candidate_list() {
        let selector = WordSelector::new(WORDS).unwrap();
        assert_eq!(selector.word_length(), 5);
        assert_eq!(selector.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_include_reference_set() {
        for word in ["SHAKE", "SHARE", "PANIC", "AMUSE", "SHADE"] {
            assert!(WORDS.contains(&word), "Missing '{word}'");
        }
    }
}
