use std::time::Duration;

use toruslife_common::{ConfigError, GridSize, decode_generations, validate_generations};

/// Autoplay configuration: grid size, generation limit and pacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Side length of the randomly seeded world.
    pub size: GridSize,
    /// Number of generations to show; `None` runs until stopped.
    pub generations: Option<u64>,
    /// Pause between rendering a generation and advancing.
    pub interval: Duration,
    /// Seed for reproducible worlds; `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            size: GridSize::clamped(20),
            generations: None,
            interval: Duration::from_millis(200),
            seed: None,
        }
    }
}

impl AutoplayConfig {
    /// Validate raw caller input.
    pub fn from_raw(size: i64, generations: Option<i64>) -> Result<Self, ConfigError> {
        Ok(Self {
            size: GridSize::new(size)?,
            generations: generations.map(validate_generations).transpose()?,
            ..Self::default()
        })
    }

    /// Validate dynamically typed input; `null` generations means unlimited.
    pub fn from_value(
        size: &serde_json::Value,
        generations: Option<&serde_json::Value>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            size: GridSize::from_value(size)?,
            generations: generations
                .filter(|v| !v.is_null())
                .map(decode_generations)
                .transpose()?,
            ..Self::default()
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
