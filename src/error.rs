//! Configuration and setup errors.
//!
//! Illegal moves are not errors; see `rules::Rejection`.

/// Errors raised while building a game from configuration or a setup diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be between 1x1 and {max}x{max}, got {height}x{width}")]
    InvalidDimensions {
        height: usize,
        width: usize,
        max: usize,
    },

    #[error("player count must be between 1 and {max}, got {count}")]
    InvalidPlayerCount { count: usize, max: usize },

    #[error("setup has {found} rows, board has {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("setup row {row} has {found} columns, board has {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("stone for player {player} at row {row}, column {col} but only {player_count} players")]
    UnknownPlayer {
        row: usize,
        col: usize,
        player: usize,
        player_count: usize,
    },

    #[error("snapshot has {found} cells for {expected} intersections")]
    CellCount { expected: usize, found: usize },
}
