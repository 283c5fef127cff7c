use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// One step of the speed curve: fires while the current delay is still above
/// `threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedRule {
    pub threshold: u64,
    pub decrement: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board, in cells.
    pub grid_size: i32,
    /// Tick interval at the start of every session.
    pub initial_delay_ms: u64,
    /// Hard floor the delay can never fall below.
    pub min_delay_ms: u64,
    /// Ordered rules; at most one fires per food eaten.
    pub speed_rules: Vec<SpeedRule>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: 20,
            initial_delay_ms: 200,
            min_delay_ms: 25,
            speed_rules: vec![
                SpeedRule { threshold: 150, decrement: 5 },
                SpeedRule { threshold: 100, decrement: 3 },
                SpeedRule { threshold: 50, decrement: 2 },
                SpeedRule { threshold: 25, decrement: 1 },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: GameConfig =
            serde_yaml_ng::from_str(text).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid size must be positive");
        ensure!(self.min_delay_ms > 0, "minimum delay must be positive");
        ensure!(
            self.initial_delay_ms >= self.min_delay_ms,
            "initial delay {}ms is below the minimum delay {}ms",
            self.initial_delay_ms,
            self.min_delay_ms
        );
        Ok(())
    }

    /// Delay for the ticks after a food-consumption event. The first rule
    /// whose threshold lies below the current delay fires, once; the result
    /// is clamped at `min_delay_ms`.
    pub fn next_delay(&self, delay_ms: u64) -> u64 {
        for rule in &self.speed_rules {
            if rule.threshold < delay_ms {
                return delay_ms.saturating_sub(rule.decrement).max(self.min_delay_ms);
            }
        }

        delay_ms
    }
}
