//! Display functions for the line-based game

use super::formatters::{colored_guess, create_progress_bar};
use crate::game::{GuessRecord, Outcome, Statistics};
use colored::Colorize;

/// Print every guess so far as coloured tiles
pub fn print_history(history: &[GuessRecord], max_attempts: usize) {
    println!();
    for (i, record) in history.iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(record.guess(), record.feedback()),
            record.feedback().to_emoji()
        );
    }
    println!(
        "\n  Attempts: [{}] {}/{}",
        create_progress_bar(history.len(), max_attempts, max_attempts * 2),
        history.len(),
        max_attempts
    );
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: &Outcome, attempts: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match outcome {
        Outcome::Win => {
            println!("{}", "  🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!(
                "  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        Outcome::Loss { secret_word } => {
            println!("{}", "  ❌  Out of guesses".red().bold());
            println!(
                "  The word was {}",
                secret_word.bright_yellow().bold()
            );
        }
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the running tally
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\n📈 Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        if count > 0 {
            println!("   {guesses}: {}", "█".repeat(count).green());
        }
    }
}
