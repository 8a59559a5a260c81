use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arcade_core::{MazeConfig, SnakeConfig, TileMatchConfig};
use serde::{Deserialize, Serialize};

/// Per-game settings, read from the `[tile_match]`, `[maze_chase]` and
/// `[snake]` tables of a TOML file. Missing tables and keys keep defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub tile_match: TileMatchConfig,
    pub maze_chase: MazeConfig,
    pub snake: SnakeConfig,
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
