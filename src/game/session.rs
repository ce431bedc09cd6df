//! Game session: the single entry point for presentation layers
//!
//! A session owns the game state, the input buffer, the candidate pool and
//! the random source. Presentation code translates platform input into
//! [`KeyEvent`]s, feeds them to [`Session::on_key_event`], and reads state
//! back through the accessors. The session performs no I/O.

use super::{GameConfig, GameState, GameStatus, GuessRecord, InputBuffer, Outcome, WordSelector};
use crate::core::{GameError, Word};
use rand::Rng;

/// Closed set of input events understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Character(char),
    Backspace,
    Submit,
    Quit,
}

/// What a key event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed
    Ignored,
    /// The in-progress guess changed
    BufferChanged,
    /// Strict mode refused a guess outside the candidate list; the buffer is kept
    Rejected(Word),
    /// A guess was scored and the game goes on
    Scored(GuessRecord),
    /// A guess was scored and ended the game
    Finished { record: GuessRecord, outcome: Outcome },
    /// The player asked to leave
    Quit,
}

/// One player's game, from secret selection to outcome
#[derive(Debug)]
pub struct Session<R: Rng> {
    selector: WordSelector,
    rng: R,
    config: GameConfig,
    state: GameState,
    buffer: InputBuffer,
    quit_requested: bool,
}

impl<R: Rng> Session<R> {
    /// Start a game with a secret drawn from `selector` using `rng`
    pub fn new(selector: WordSelector, mut rng: R, config: GameConfig) -> Self {
        let secret = selector.select(&mut rng);
        let state = GameState::new(secret, config.max_attempts);
        let buffer = InputBuffer::new(selector.word_length());

        log::info!(
            "New game: {} letters, {} attempts, {} candidates",
            selector.word_length(),
            config.max_attempts,
            selector.len()
        );

        Self {
            selector,
            rng,
            config,
            state,
            buffer,
            quit_requested: false,
        }
    }

    /// Abandon the current game and start another with a fresh secret
    pub fn new_game(&mut self) {
        let secret = self.selector.select(&mut self.rng);
        self.state = GameState::new(secret, self.config.max_attempts);
        self.buffer.reset();
        log::info!("New game started");
    }

    /// Apply one input event
    ///
    /// Unusable keystrokes are ignored. Submitting after the game has ended
    /// is a caller bug and is reported as an error.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyEnded` for `Submit` once the game is over
    /// - `GameError::InvalidGuessLength` if a guess somehow has the wrong length
    pub fn on_key_event(&mut self, event: KeyEvent) -> Result<Response, GameError> {
        log::trace!("Key event: {event:?}");

        match event {
            KeyEvent::Quit => {
                self.quit_requested = true;
                Ok(Response::Quit)
            }
            KeyEvent::Character(ch) => Ok(self.edit(|buffer| buffer.append_letter(ch))),
            KeyEvent::Backspace => Ok(self.edit(InputBuffer::backspace)),
            KeyEvent::Submit => self.submit(),
        }
    }

    fn edit(&mut self, op: impl FnOnce(&mut InputBuffer) -> bool) -> Response {
        if self.state.status().is_terminal() {
            return Response::Ignored;
        }
        if op(&mut self.buffer) {
            Response::BufferChanged
        } else {
            Response::Ignored
        }
    }

    fn submit(&mut self) -> Result<Response, GameError> {
        if self.state.status().is_terminal() {
            log::warn!("Submit received after the game ended");
            return Err(GameError::GameAlreadyEnded);
        }

        let Some(guess) = self.buffer.try_submit() else {
            return Ok(Response::Ignored);
        };

        if self.config.strict && !self.selector.contains(&guess) {
            log::debug!("Rejected {guess}: not in the candidate list");
            return Ok(Response::Rejected(guess));
        }

        let record = self.state.submit_guess(guess)?.clone();
        self.buffer.reset();

        Ok(match self.state.outcome() {
            Some(outcome) => {
                log::info!(
                    "Game over after {} attempts: {outcome:?}",
                    self.state.history().len()
                );
                Response::Finished { record, outcome }
            }
            None => Response::Scored(record),
        })
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.state.history()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn secret_word_if_revealed(&self) -> Option<&Word> {
        self.state.secret_if_revealed()
    }

    #[inline]
    #[must_use]
    pub fn buffer_contents(&self) -> &str {
        self.buffer.contents()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.state.attempts_remaining()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    #[inline]
    #[must_use]
    pub const fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.selector.word_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Correct, Present};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session_with(secret: &str, config: GameConfig) -> Session<StdRng> {
        let selector = WordSelector::new(&[secret]).unwrap();
        Session::new(selector, StdRng::seed_from_u64(0), config)
    }

    fn session(secret: &str) -> Session<StdRng> {
        session_with(secret, GameConfig::default())
    }

    fn type_word(session: &mut Session<StdRng>, text: &str) {
        for ch in text.chars() {
            session.on_key_event(KeyEvent::Character(ch)).unwrap();
        }
    }

    fn guess(session: &mut Session<StdRng>, text: &str) -> Result<Response, GameError> {
        type_word(session, text);
        session.on_key_event(KeyEvent::Submit)
    }

    #[test]
    fn typing_fills_the_buffer() {
        let mut s = session("SHAKE");
        assert_eq!(
            s.on_key_event(KeyEvent::Character('s')),
            Ok(Response::BufferChanged)
        );
        assert_eq!(
            s.on_key_event(KeyEvent::Character('!')),
            Ok(Response::Ignored)
        );
        assert_eq!(s.buffer_contents(), "S");
        assert_eq!(s.on_key_event(KeyEvent::Backspace), Ok(Response::BufferChanged));
        assert_eq!(s.on_key_event(KeyEvent::Backspace), Ok(Response::Ignored));
        assert_eq!(s.buffer_contents(), "");
    }

    #[test]
    fn incomplete_submit_is_ignored() {
        let mut s = session("SHAKE");
        assert_eq!(guess(&mut s, "SHA"), Ok(Response::Ignored));
        assert_eq!(s.buffer_contents(), "SHA");
        assert!(s.history().is_empty());
    }

    #[test]
    fn scored_guess_clears_the_buffer() {
        let mut s = session("SHAKE");
        let Ok(Response::Scored(record)) = guess(&mut s, "EAKHS") else {
            panic!("expected a scored guess");
        };

        assert_eq!(record.feedback().letters(), &[Present; 5]);
        assert_eq!(s.buffer_contents(), "");
        assert_eq!(s.attempts_remaining(), 5);
        assert_eq!(s.secret_word_if_revealed(), None);
    }

    #[test]
    fn winning_guess_announces_outcome() {
        let mut s = session("SHAKE");
        let response = guess(&mut s, "shake").unwrap();

        let Response::Finished { record, outcome } = response else {
            panic!("expected the game to finish");
        };
        assert_eq!(record.feedback().letters(), &[Correct; 5]);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.secret_word_if_revealed().map(Word::text), Some("SHAKE"));
    }

    #[test]
    fn sixth_miss_loses_and_seventh_submit_fails() {
        let mut s = session("SHAKE");
        for word in ["SHARE", "PANIC", "AMUSE", "SHADE", "CRANE"] {
            assert!(matches!(guess(&mut s, word), Ok(Response::Scored(_))));
        }

        assert_eq!(
            guess(&mut s, "SLATE"),
            Ok(Response::Finished {
                record: s.history()[5].clone(),
                outcome: Outcome::Loss {
                    secret_word: "SHAKE".to_string()
                },
            })
        );
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.secret_word_if_revealed().map(Word::text), Some("SHAKE"));

        assert_eq!(
            s.on_key_event(KeyEvent::Submit),
            Err(GameError::GameAlreadyEnded)
        );
        assert_eq!(s.history().len(), 6);
    }

    #[test]
    fn typing_after_game_end_is_ignored() {
        let mut s = session("SHAKE");
        guess(&mut s, "SHAKE").unwrap();

        assert_eq!(
            s.on_key_event(KeyEvent::Character('A')),
            Ok(Response::Ignored)
        );
        assert_eq!(s.buffer_contents(), "");
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let mut s = session_with("SHAKE", GameConfig::default().with_strict(true));
        assert_eq!(
            guess(&mut s, "CRANE"),
            Ok(Response::Rejected(Word::new("CRANE").unwrap()))
        );
        assert_eq!(s.buffer_contents(), "CRANE");
        assert!(s.history().is_empty());
    }

    #[test]
    fn quit_is_recorded() {
        let mut s = session("SHAKE");
        assert!(!s.quit_requested());
        assert_eq!(s.on_key_event(KeyEvent::Quit), Ok(Response::Quit));
        assert!(s.quit_requested());
    }

    #[test]
    fn new_game_resets_history_and_buffer() {
        let mut s = session("SHAKE");
        guess(&mut s, "SHAKE").unwrap();
        type_word(&mut s, "AB");

        s.new_game();
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.history().is_empty());
        assert_eq!(s.buffer_contents(), "");
        assert_eq!(s.attempts_remaining(), 6);
    }
}
