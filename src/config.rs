//! Configuration management for numguess

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GameResult, GuessError};
use crate::game::{Difficulty, DEFAULT_HINTS_PER_ROUND};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumguessConfig {
    /// Round rules
    pub game: GameConfig,
    /// Presentation settings
    pub display: DisplayConfig,
}

/// Round rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty of the first round
    pub default_difficulty: Difficulty,
    /// Hints granted at the start of each round
    pub hints_per_round: u32,
    /// Fixed seed for target selection; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Medium,
            hints_per_round: DEFAULT_HINTS_PER_ROUND,
            seed: None,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Timer refresh cadence (milliseconds)
    pub tick_interval_ms: u64,
    /// Rows shown per page of the guess log
    pub history_page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            history_page_size: 5,
        }
    }
}

impl NumguessConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GuessError::configuration(format!("Failed to read config file: {}", e), "config_file"))?;

        let config: NumguessConfig = toml::from_str(&content)
            .map_err(|e| GuessError::configuration(format!("Failed to parse config file: {}", e), "config_format"))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            GuessError::configuration(format!("Failed to serialize config: {}", e), "config_serialization")
        })?;

        fs::write(path, content)
            .map_err(|e| GuessError::configuration(format!("Failed to write config file: {}", e), "config_write"))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> GameResult<()> {
        if self.game.hints_per_round == 0 {
            return Err(GuessError::configuration(
                "Hints per round must be greater than 0",
                "game.hints_per_round",
            ));
        }

        if !(10..=1000).contains(&self.display.tick_interval_ms) {
            return Err(GuessError::configuration(
                "Tick interval must be between 10 and 1000 milliseconds",
                "display.tick_interval_ms",
            ));
        }

        if self.display.history_page_size == 0 {
            return Err(GuessError::configuration(
                "History page size must be greater than 0",
                "display.history_page_size",
            ));
        }

        Ok(())
    }

    /// Easy range with extra hints
    pub fn practice() -> Self {
        Self {
            game: GameConfig {
                default_difficulty: Difficulty::Easy,
                hints_per_round: 5,
                seed: None,
            },
            display: DisplayConfig {
                history_page_size: 10,
                ..Default::default()
            },
        }
    }

    /// Hard range with a single hint
    pub fn challenge() -> Self {
        Self {
            game: GameConfig {
                default_difficulty: Difficulty::Hard,
                hints_per_round: 1,
                seed: None,
            },
            display: DisplayConfig::default(),
        }
    }
}
