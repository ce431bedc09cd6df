//! Terminal output formatting
//!
//! Display utilities for the line-based game.

pub mod display;
pub mod formatters;

pub use display::{print_history, print_outcome, print_statistics};
