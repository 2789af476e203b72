//! Game configuration.
//!
//! Hosts describe the board and the table at startup; the engine builds its
//! grid, key table and per-player tallies from this.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::zobrist::DEFAULT_ZOBRIST_SEED;
use crate::error::ConfigError;

/// Largest supported board side.
pub const MAX_BOARD_SIDE: usize = 64;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Board size, player count and fingerprint seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows on the board.
    pub height: usize,

    /// Columns on the board.
    pub width: usize,

    /// Players in turn order. Two for a normal game.
    pub player_count: usize,

    /// Seed for the Zobrist key table.
    /// Any value works; it only has to be the same for positions that are compared.
    pub zobrist_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 9,
            width: 9,
            player_count: 2,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
        }
    }
}

impl GameConfig {
    /// Square board of the given side.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.height = size;
        self.width = size;
        self
    }

    /// Rectangular board.
    #[must_use]
    pub fn with_dimensions(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |n: usize| (1..=MAX_BOARD_SIDE).contains(&n);
        if !side_ok(self.height) || !side_ok(self.width) {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
                max: MAX_BOARD_SIDE,
            });
        }
        if !(1..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::InvalidPlayerCount {
                count: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        Ok(())
    }

    /// Grid for these dimensions. Call `validate` first.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.height, 9);
        assert_eq!(config.width, 9);
        assert_eq!(config.player_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_dimensions(13, 7)
            .with_players(3)
            .with_seed(123);

        assert_eq!(config.grid(), Grid::new(13, 7));
        assert_eq!(config.player_count, 3);
        assert_eq!(config.zobrist_seed, 123);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            GameConfig::default().with_size(0).validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            GameConfig::default().with_dimensions(19, 65).validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert_eq!(
            GameConfig::default().with_players(0).validate(),
            Err(ConfigError::InvalidPlayerCount { count: 0, max: 8 })
        );
        assert!(GameConfig::default().with_players(1).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_size(19);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
