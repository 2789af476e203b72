//! # go-engine
//!
//! Rules engine for a territory-capture board game played by placing
//! stones on the intersections of a grid.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: every accepted move produces a new
//!    `BoardState`; nothing already handed out is mutated. Snapshots are
//!    backed by `im` persistent vectors so keeping the whole history is cheap.
//!
//! 2. **Illegal moves are values**: `Rules::try_place` returns
//!    `Result<Placement, Rejection>`. A rejection is an expected outcome,
//!    and leaves the session exactly as it was.
//!
//! 3. **Positional superko**: a placement may not recreate any earlier
//!    stone layout in the game, whoever was to move. Positions carry a
//!    Zobrist fingerprint so the history scan is mostly `u64` compares.
//!
//! 4. **N players**: turn order and captures work for any table size; two
//!    players is only the default.
//!
//! ## Modules
//!
//! - `core`: points, players, colors, grid geometry, snapshots, configuration
//! - `rules`: group/liberty analysis and the placement pipeline
//! - `session`: turn loop, passes, resignation, undo, capture tallies
//! - `terminal`: input parsing and board drawing for the terminal harness
//!
//! Rendering and input polling belong to the host. The library only emits
//! `tracing` events and never installs a subscriber.

pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{BoardState, Color, GameConfig, Grid, PlayerId, PlayerMap, Point, Position};

pub use crate::error::ConfigError;

pub use crate::rules::{group_and_liberties, group_at, Group, Placement, PositionHistory, Rejection, Rules};

pub use crate::session::{GameEnd, GameSession, Move, MoveRecord, SessionStatus};
