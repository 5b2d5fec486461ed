//! Engine configuration.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for deterministic combat and loot rolls.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
