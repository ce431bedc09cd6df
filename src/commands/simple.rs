//! Simple line-based game mode
//!
//! Text-based game loop without the TUI. Each input line is typed into the
//! session letter by letter and then submitted.

use crate::game::{GameStatus, KeyEvent, Response, Session, Statistics};
use crate::output::{print_history, print_outcome, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails, or if the
/// session reports a game-state error.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the line-based game loop reading lines from `input`
///
/// # Errors
///
/// See [`run_simple`].
pub fn run_simple_with<R: Rng, I: BufRead>(session: &mut Session<R>, input: &mut I) -> Result<()> {
    let mut stats = Statistics::default();
    print_banner(session);

    loop {
        let Some(line) = prompt(input, &format!("Guess ({} left)", session.attempts_remaining()))?
        else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            ":q" | ":quit" => {
                session.on_key_event(KeyEvent::Quit)?;
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            _ => {}
        }

        match submit_line(session, &line)? {
            Response::Scored(_) => {
                print_history(session.history(), session.config().max_attempts.get());
            }
            Response::Finished { outcome, .. } => {
                print_history(session.history(), session.config().max_attempts.get());
                print_outcome(&outcome, session.history().len());
                stats.record(&outcome, session.history().len());
                print_statistics(&stats);

                let again = prompt(input, "Play again? (yes/no)")?;
                if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                    session.new_game();
                    println!("\n🔄 New game started!\n");
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            Response::Rejected(word) => {
                println!("{}", format!("❌ {word} is not in the word list").red());
            }
            Response::Ignored | Response::BufferChanged | Response::Quit => {
                println!(
                    "{}",
                    format!("❌ Enter exactly {} letters", session.word_length()).red()
                );
            }
        }
    }
}

/// Type a whole line into the session and submit it
///
/// The buffer is cleared first so a rejected or short line does not leak
/// into the next attempt.
fn submit_line<R: Rng>(session: &mut Session<R>, line: &str) -> Result<Response> {
    debug_assert_eq!(session.status(), GameStatus::InProgress);

    while session.on_key_event(KeyEvent::Backspace)? == Response::BufferChanged {}

    let letters = line.chars().filter(|c| !c.is_whitespace()).count();
    if letters != session.word_length() {
        return Ok(Response::Ignored);
    }
    for ch in line.chars().filter(|c| !c.is_whitespace()) {
        session.on_key_event(KeyEvent::Character(ch))?;
    }

    Ok(session.on_key_event(KeyEvent::Submit)?)
}

fn print_banner<R: Rng>(session: &Session<R>) {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                W O R D   G A M E                 ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        session.word_length(),
        session.config().max_attempts
    );
    println!("  🟩 right letter, right spot");
    println!("  🟨 right letter, wrong spot");
    println!("  ⬜ not in the word\n");
    println!("Type ':q' to exit.\n");
}

/// Print a prompt and read one trimmed line, `None` on end of input
fn prompt<I: BufRead>(input: &mut I, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, WordSelector};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        let selector = WordSelector::new(&["SHAKE"]).unwrap();
        Session::new(selector, StdRng::seed_from_u64(0), GameConfig::default())
    }

    #[test]
    fn submit_line_scores_full_words() {
        let mut s = session();
        assert!(matches!(submit_line(&mut s, "share"), Ok(Response::Scored(_))));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn submit_line_ignores_wrong_length() {
        let mut s = session();
        assert_eq!(submit_line(&mut s, "sha").unwrap(), Response::Ignored);
        assert_eq!(submit_line(&mut s, "shaker").unwrap(), Response::Ignored);
        assert!(s.history().is_empty());
        assert_eq!(s.buffer_contents(), "");
    }

    #[test]
    fn game_loop_ends_on_win_and_decline() {
        let mut s = session();
        let mut input = "panic\nshake\nno\n".as_bytes();

        run_simple_with(&mut s, &mut input).unwrap();
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn game_loop_stops_at_end_of_input() {
        let mut s = session();
        let mut input = "share\n".as_bytes();

        run_simple_with(&mut s, &mut input).unwrap();
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn quit_command_marks_session() {
        let mut s = session();
        let mut input = ":q\n".as_bytes();

        run_simple_with(&mut s, &mut input).unwrap();
        assert!(s.quit_requested());
        assert!(s.history().is_empty());
    }

    #[test]
    fn quit_is_guessable_as_a_word() {
        let selector = WordSelector::new(&["QUIT"]).unwrap();
        let mut s = Session::new(selector, StdRng::seed_from_u64(0), GameConfig::default());
        let mut input = "quit\nno\n".as_bytes();

        run_simple_with(&mut s, &mut input).unwrap();
        assert_eq!(s.status(), GameStatus::Won);
        assert!(!s.quit_requested());
    }
}
