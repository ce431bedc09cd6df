//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// RGB colours of the feedback tiles
pub const GREEN: (u8, u8, u8) = (83, 141, 78);
pub const YELLOW: (u8, u8, u8) = (181, 159, 59);
pub const GRAY: (u8, u8, u8) = (58, 58, 60);

/// Tile colour for a feedback entry
#[must_use]
pub const fn feedback_rgb(feedback: LetterFeedback) -> (u8, u8, u8) {
    match feedback {
        LetterFeedback::Correct => GREEN,
        LetterFeedback::Present => YELLOW,
        LetterFeedback::Absent => GRAY,
    }
}

/// Render a single letter as a coloured tile, e.g. " S "
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let (r, g, b) = feedback_rgb(feedback);
    format!(" {letter} ").white().bold().on_truecolor(r, g, b)
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, &fb)| letter_tile(letter, fb).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
