//! Core value types: points, players, colors, geometry, snapshots, configuration.
//!
//! Everything here is a plain value with structural equality. Rules live in
//! `rules`, turn sequencing in `session`.

pub mod point;
pub mod player;
pub mod color;
pub mod grid;
pub mod zobrist;
pub mod state;
pub mod config;

pub use point::Point;
pub use player::{PlayerId, PlayerMap};
pub use color::Color;
pub use grid::{Grid, Neighbors};
pub use zobrist::{ZobristKeys, DEFAULT_ZOBRIST_SEED};
pub use state::{BoardState, Position};
pub use config::{GameConfig, MAX_BOARD_SIDE, MAX_PLAYERS};
