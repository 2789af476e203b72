//! Game sessions: turn order, history, passes, resignation and undo.
//!
//! The session is the only stateful part of the engine. It hands each
//! placement to `rules::Rules` with the full snapshot history so that
//! positional superko covers the whole game.

pub mod game;

pub use game::{GameEnd, GameSession, Move, MoveRecord, SessionStatus};
