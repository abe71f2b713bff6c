//! Game parameters.
//!
//! Every field has a default matching the published rules, so an empty YAML
//! document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::penalty::{FLOOR_CAPACITY, FLOOR_PENALTY};

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(u8),
    #[error("tiles_per_color must be at least 1")]
    NoTiles,
    #[error("floor_penalties must have exactly 7 entries, got {0}")]
    PenaltyTableLength(usize),
    #[error("floor penalty entries must not be positive, got {0}")]
    PositivePenalty(i32),
    #[error("{name} must not be negative, got {value}")]
    NegativeBonus { name: &'static str, value: i32 },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles of each color in the game.
    pub tiles_per_color: u16,
    /// Bonus per completed wall row at game end.
    pub row_bonus: i32,
    /// Bonus per completed wall column at game end.
    pub column_bonus: i32,
    /// Bonus per color with all five tiles on the wall at game end.
    pub color_set_bonus: i32,
    /// Cumulative floor-line penalties, one entry per slot.
    pub floor_penalties: Vec<i32>,
    /// When false, scores never drop below zero.
    pub allow_negative_scores: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tiles_per_color: 20,
            row_bonus: 2,
            column_bonus: 7,
            color_set_bonus: 10,
            floor_penalties: FLOOR_PENALTY.to_vec(),
            allow_negative_scores: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles_per_color == 0 {
            return Err(ConfigError::NoTiles);
        }
        if self.floor_penalties.len() != FLOOR_CAPACITY {
            return Err(ConfigError::PenaltyTableLength(self.floor_penalties.len()));
        }
        if let Some(&p) = self.floor_penalties.iter().find(|&&p| p > 0) {
            return Err(ConfigError::PositivePenalty(p));
        }
        for (name, value) in [
            ("row_bonus", self.row_bonus),
            ("column_bonus", self.column_bonus),
            ("color_set_bonus", self.color_set_bonus),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeBonus { name, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Total tiles in circulation.
    pub fn total_tiles(&self) -> usize {
        self.tiles_per_color as usize * crate::tile::TILE_COLORS
    }
}

pub(crate) fn check_player_count(num_players: u8) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPlayerCount(num_players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
        assert_eq!(GameConfig::default().total_tiles(), 100);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = GameConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config =
            GameConfig::from_yaml_str("tiles_per_color: 12\nallow_negative_scores: true\n").unwrap();
        assert_eq!(config.tiles_per_color, 12);
        assert!(config.allow_negative_scores);
        assert_eq!(config.column_bonus, 7);
    }

    #[test]
    fn test_rejects_bad_penalty_table() {
        let err = GameConfig::from_yaml_str("floor_penalties: [-1, -1]").unwrap_err();
        assert!(matches!(err, ConfigError::PenaltyTableLength(2)));

        let err =
            GameConfig::from_yaml_str("floor_penalties: [-1, -1, -2, 2, -2, -3, -3]").unwrap_err();
        assert!(matches!(err, ConfigError::PositivePenalty(2)));
    }

    #[test]
    fn test_rejects_zero_tiles_and_negative_bonus() {
        assert!(matches!(
            GameConfig::from_yaml_str("tiles_per_color: 0"),
            Err(ConfigError::NoTiles)
        ));
        assert!(matches!(
            GameConfig::from_yaml_str("row_bonus: -2"),
            Err(ConfigError::NegativeBonus { name: "row_bonus", value: -2 })
        ));
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(check_player_count(1).is_err());
        assert!(check_player_count(2).is_ok());
        assert!(check_player_count(4).is_ok());
        assert!(check_player_count(5).is_err());
    }
}
