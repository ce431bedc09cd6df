//! Word Game
//!
//! A word-guessing game with a presentation-free core: the player has a fixed
//! number of attempts to find a secret word, with per-letter feedback after
//! every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::game::{GameConfig, KeyEvent, Response, Session, WordSelector};
//!
//! let selector = WordSelector::new(&["shake"]).unwrap();
//! let mut session = Session::new(selector, StdRng::seed_from_u64(1), GameConfig::default());
//!
//! for ch in "shake".chars() {
//!     session.on_key_event(KeyEvent::Character(ch)).unwrap();
//! }
//! let response = session.on_key_event(KeyEvent::Submit).unwrap();
//! assert!(matches!(response, Response::Finished { .. }));
//! ```

// Core domain types
pub mod core;

// Game state machine and session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
