//! Word list loading utilities
//!
//! Provides functions to load candidate lists from files.

use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file, one per line
///
/// Lines are trimmed and blank lines skipped. Entries are returned as-is so
/// that malformed lists are reported by `WordSelector` instead of being
/// silently filtered here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split word list text into trimmed, non-empty lines
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
