//! Word Game - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;
use wordle_game::{
    commands::run_simple,
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, Session, WordSelector},
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: NonZeroUsize,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for secret word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,
}

/// Load the candidate list selected by the -w flag
fn load_candidates(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let candidates = load_candidates(&cli.wordlist)?;
    let selector = WordSelector::new(candidates.as_slice())
        .with_context(|| format!("word list '{}' cannot be used", cli.wordlist))?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GameConfig::new(cli.attempts).with_strict(cli.strict);
    let mut session = Session::new(selector, rng, config);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            use wordle_game::interactive::{App, run_tui};
            run_tui(App::new(session))
        }
        Commands::Simple => run_simple(&mut session),
    }
}
