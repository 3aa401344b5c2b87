use std::path::PathBuf;

use numguess::{Difficulty, NumguessConfig};

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub tick_ms: Option<u64>,
}

/// Load the config file (or defaults), apply overrides, validate
pub fn load(path: Option<&PathBuf>, overrides: &Overrides) -> numguess::GameResult<NumguessConfig> {
    let mut config = match path {
        Some(path) => NumguessConfig::from_file(path)?,
        None => NumguessConfig::default(),
    };

    if let Some(difficulty) = overrides.difficulty {
        config.game.default_difficulty = difficulty;
    }
    if overrides.seed.is_some() {
        config.game.seed = overrides.seed;
    }
    if let Some(tick_ms) = overrides.tick_ms {
        config.display.tick_interval_ms = tick_ms;
    }

    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<String>,
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "guess> ".to_string(),
            history_file: Some(".numguess_history".to_string()),
            max_history: 1000,
        }
    }
}
