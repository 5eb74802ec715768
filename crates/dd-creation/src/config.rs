//! Configuration for a creation run.

use std::path::PathBuf;
use std::time::Duration;

/// Where the bundled scenario lives, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "./assets/data/character_creation.json";

/// Configuration for a creation run.
#[derive(Debug, Clone)]
pub struct CreationConfig {
    /// Scenario file to load.
    pub data_path: PathBuf,
    /// RNG seed; `None` seeds from OS entropy so every run differs.
    pub seed: Option<u64>,
    /// How long the cosmetic "rolling" effect runs before each roll.
    pub roll_delay: Duration,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: None,
            roll_delay: Duration::from_secs(3),
        }
    }
}

impl CreationConfig {
    /// Set the scenario path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rolling effect duration. Zero disables it.
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }
}
