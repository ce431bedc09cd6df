//! Game configuration

use std::num::NonZeroUsize;

/// Attempts allowed when nothing else is configured
pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(5);

/// Rules for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_attempts: NonZeroUsize,
    /// Reject guesses that are not in the candidate list
    pub strict: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: NonZeroUsize) -> Self {
        Self {
            max_attempts,
            strict: false,
        }
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_allows_six_attempts() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts.get(), 6);
        assert!(!config.strict);
    }

    #[test]
    fn builder_sets_strict() {
        let config = GameConfig::new(NonZeroUsize::new(3).unwrap()).with_strict(true);
        assert_eq!(config.max_attempts.get(), 3);
        assert!(config.strict);
    }
}
