//! Secret word selection
//!
//! The candidate list is validated once, up front. Randomness comes from the
//! caller so a seeded generator gives reproducible games.

use crate::core::{CandidateListError, GameError, Word};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Validated pool of candidate secret words, all of the same length
#[derive(Debug, Clone)]
pub struct WordSelector {
    candidates: Vec<Word>,
    lookup: FxHashSet<Word>,
    word_length: usize,
}

impl WordSelector {
    /// Validate and normalize a candidate list
    ///
    /// Candidates are uppercased and de-duplicated, keeping first occurrence
    /// order. The first candidate fixes the word length.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCandidateList` if the list is empty, if an
    /// entry is not a word, or if the entries differ in length.
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Result<Self, GameError> {
        let mut words = Vec::with_capacity(candidates.len());
        let mut lookup = FxHashSet::default();
        let mut word_length = None;

        for raw in candidates {
            let raw = raw.as_ref();
            let word = Word::new(raw).map_err(|source| CandidateListError::InvalidWord {
                word: raw.to_string(),
                source,
            })?;

            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(CandidateListError::MismatchedLength {
                    word: word.text().to_string(),
                    expected,
                    actual: word.len(),
                }
                .into());
            }

            if lookup.insert(word.clone()) {
                words.push(word);
            }
        }

        let Some(word_length) = word_length else {
            return Err(CandidateListError::Empty.into());
        };

        log::debug!(
            "Accepted {} distinct candidates of length {word_length}",
            words.len()
        );

        Ok(Self {
            candidates: words,
            lookup,
            word_length,
        })
    }

    /// Pick a secret word uniformly at random
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.candidates.len());
        self.candidates[index].clone()
    }

    /// Check whether a word is one of the candidates
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Length shared by every candidate
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false: an empty list is refused at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &["SHAKE", "SHARE", "PANIC", "AMUSE", "SHADE"];

    #[test]
    fn empty_list_is_rejected() {
        let empty: &[&str] = &[];
        assert_eq!(
            WordSelector::new(empty).unwrap_err(),
            GameError::InvalidCandidateList(CandidateListError::Empty)
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = WordSelector::new(&["SHAKE", "CAT"]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidCandidateList(CandidateListError::MismatchedLength {
                word: "CAT".to_string(),
                expected: 5,
                actual: 3,
            })
        );
    }

    #[test]
    fn non_words_are_rejected() {
        let err = WordSelector::new(&["SHAKE", "SH4KE"]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidCandidateList(CandidateListError::InvalidWord {
                word: "SH4KE".to_string(),
                source: WordError::NonAlphabetic('4'),
            })
        );
    }

    #[test]
    fn candidates_are_normalized_and_deduplicated() {
        let selector = WordSelector::new(&["shake", "SHAKE", "Panic"]).unwrap();
        assert_eq!(selector.len(), 2);
        assert_eq!(selector.word_length(), 5);
        assert!(selector.contains(&Word::new("panic").unwrap()));
        assert!(!selector.contains(&Word::new("amuse").unwrap()));
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let selector = WordSelector::new(WORDS).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(selector.select(&mut a), selector.select(&mut b));
        }
    }

    #[test]
    fn selection_always_comes_from_candidates() {
        let selector = WordSelector::new(WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let secret = selector.select(&mut rng);
            assert!(selector.contains(&secret));
        }
    }

    #[test]
    fn selection_reaches_every_candidate() {
        let selector = WordSelector::new(WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<Word> = (0..500).map(|_| selector.select(&mut rng)).collect();

        assert_eq!(seen.len(), WORDS.len());
    }

    #[test]
    fn single_candidate_is_always_selected() {
        let mut rng = StdRng::seed_from_u64(3);
        let selector = WordSelector::new(&["amuse"]).unwrap();
        assert_eq!(selector.select(&mut rng).text(), "AMUSE");
    }
}
