//! TUI rendering with ratatui
//!
//! Draws the board from the session's read accessors only.

use super::app::{App, MessageStyle};
use crate::core::LetterFeedback;
use crate::game::GameStatus;
use crate::output::formatters::{GRAY, feedback_rgb};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const BACKGROUND: Color = Color::Rgb(18, 18, 19);
const EMPTY_TILE: Color = Color::Rgb(39, 39, 41);

/// Empty rows drawn below the current row are capped at this many
const MAX_EMPTY_ROWS: usize = 10;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// One line per attempt: scored rows, the row being typed, then empty rows
fn board_lines<R: Rng>(app: &App<R>) -> Vec<Line<'static>> {
    let session = &app.session;
    let width = session.word_length();
    let mut lines = Vec::new();

    for record in session.history() {
        let spans: Vec<Span> = record
            .guess()
            .text()
            .chars()
            .zip(record.feedback().letters())
            .flat_map(|(letter, &fb)| [tile(letter, rgb(feedback_rgb(fb))), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if session.status() == GameStatus::InProgress {
        let typed: Vec<char> = session.buffer_contents().chars().collect();
        let spans: Vec<Span> = (0..width)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or(' ');
                [tile(letter, EMPTY_TILE), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let filled = lines.len() / 2;
    let empty_rows = session
        .config()
        .max_attempts
        .get()
        .saturating_sub(filled)
        .min(MAX_EMPTY_ROWS);
    for _ in 0..empty_rows {
        let spans: Vec<Span> = (0..width)
            .flat_map(|_| [tile('·', rgb(GRAY)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .style(Style::default().bg(BACKGROUND))
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(4),         // Statistics
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let max = app.session.config().max_attempts.get();
    let used = app.session.history().len();
    let percent = (used.saturating_mul(100) / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![Line::from(format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    ))];

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled(
                "█".repeat(count),
                Style::default().fg(rgb(feedback_rgb(LetterFeedback::Correct))),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let status_text = match app.session.secret_word_if_revealed() {
        Some(secret) if app.session.status() == GameStatus::Won => {
            format!("Solved: {secret}")
        }
        Some(secret) => format!("The word was {secret}"),
        None => format!("{} attempts left", app.session.attempts_remaining()),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = if app.is_game_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
