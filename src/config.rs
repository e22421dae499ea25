use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::UniversleError;

/// Number of guesses a player gets per game.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Runtime configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost.
    pub max_attempts: usize,
    /// Seed for target and hint selection. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), UniversleError> {
        if self.max_attempts == 0 {
            return Err(UniversleError::Config(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Random source for one game.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
