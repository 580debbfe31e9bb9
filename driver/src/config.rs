use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use connect4::{Player, SearchConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which seats the engine plays.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineSeats {
    Neither,
    One,
    #[default]
    Two,
    Both,
}

impl EngineSeats {
    pub fn controls(self, player: Player) -> bool {
        match self {
            EngineSeats::Neither => false,
            EngineSeats::One => player == Player::PlayerOne,
            EngineSeats::Two => player == Player::PlayerTwo,
            EngineSeats::Both => true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub engine: EngineSeats,
    pub search: SearchConfig,
}

impl DriverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Missing file means defaults; a broken one is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DriverConfig = toml::from_str(content)?;
        config.search.validate()?;
        Ok(config)
    }
}
