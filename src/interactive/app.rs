//! TUI application state and event loop

use crate::game::{GameStatus, KeyEvent, Outcome, Response, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        let intro = format!(
            "Guess the {}-letter word in {} tries.",
            session.word_length(),
            session.config().max_attempts
        );

        Self {
            session,
            messages: vec![
                Message {
                    text: intro,
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Esc to quit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.session.status().is_terminal() {
            self.handle_game_over_key(code, modifiers);
            return;
        }

        let Some(event) = translate_key(code, modifiers) else {
            return;
        };

        match self.session.on_key_event(event) {
            Ok(Response::Quit) => self.should_quit = true,
            Ok(Response::Ignored) if event == KeyEvent::Submit => {
                let needed = self.session.word_length();
                self.add_message(
                    &format!("Word must be exactly {needed} letters!"),
                    MessageStyle::Error,
                );
            }
            Ok(Response::Rejected(word)) => {
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Ok(Response::Scored(record)) => {
                let remaining = self.session.attempts_remaining();
                self.add_message(
                    &format!(
                        "{} {} | {remaining} left",
                        record.guess(),
                        record.feedback().to_emoji()
                    ),
                    MessageStyle::Info,
                );
            }
            Ok(Response::Finished { outcome, .. }) => self.finish(&outcome),
            Ok(Response::Ignored | Response::BufferChanged) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ => {
                // Game over: only new game or quit
            }
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        let attempts = self.session.history().len();
        self.stats.record(outcome, attempts);

        match outcome {
            Outcome::Win => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Loss { secret_word } => {
                self.add_message(
                    &format!("You lose! The correct word was {secret_word}."),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        !matches!(self.session.status(), GameStatus::InProgress)
    }
}

/// Map a terminal key press to a game event
///
/// Returns `None` for keys the game does not understand.
#[must_use]
pub fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyEvent> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyEvent::Quit),
        KeyCode::Esc => Some(KeyEvent::Quit),
        KeyCode::Char(c) => Some(KeyEvent::Character(c)),
        KeyCode::Backspace => Some(KeyEvent::Backspace),
        KeyCode::Enter => Some(KeyEvent::Submit),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, WordSelector};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    fn app() -> App<StdRng> {
        let selector = WordSelector::new(&["SHAKE"]).unwrap();
        App::new(Session::new(
            selector,
            StdRng::seed_from_u64(0),
            GameConfig::default(),
        ))
    }

    fn type_line(app: &mut App<StdRng>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn keys_map_to_game_events() {
        assert_eq!(
            translate_key(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(KeyEvent::Character('a'))
        );
        assert_eq!(
            translate_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyEvent::Quit)
        );
        assert_eq!(
            translate_key(KeyCode::Esc, KeyModifiers::NONE),
            Some(KeyEvent::Quit)
        );
        assert_eq!(
            translate_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyEvent::Submit)
        );
        assert_eq!(translate_key(KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn short_submission_reports_error() {
        let mut app = app();
        type_line(&mut app, "sha");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.session.buffer_contents(), "SHA");
    }

    #[test]
    fn win_updates_statistics_and_allows_new_game() {
        let mut app = app();
        type_line(&mut app, "shake");

        assert!(app.is_game_over());
        assert_eq!(app.stats.games_won, 1);

        // Letters are ignored while the game is over
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.session.buffer_contents(), "");

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(!app.is_game_over());
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn q_is_a_letter_during_play() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.session.buffer_contents(), "Q");
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn event_loop_propagates_read_errors() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let res = run_app(&mut terminal, app(), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        });

        assert!(res.is_err());
    }

    #[test]
    fn event_loop_stops_on_quit_key() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let res = run_app(&mut terminal, app(), || {
            Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Esc,
                KeyModifiers::NONE,
            )))
        });

        assert!(res.is_ok());
    }
}
