//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Play behavior configuration.
///
/// Controls how the "play all randomly" game draws its questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Fixed RNG seed. With a seed every game draws quizzes in the same
    /// order; without one each game is seeded from the OS.
    pub seed: Option<u64>,
}

impl PlayConfig {
    /// Creates a PlayConfig with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Creates the random number generator for one game.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
