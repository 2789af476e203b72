//! Reasons a move is refused.
//!
//! Rejections are ordinary outcomes of play, not failures: the caller shows
//! the reason and asks the same player again. The `Display` text is meant
//! to be shown verbatim.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Rejection {
    #[error("that point is off the board")]
    OutOfBounds,

    #[error("that point is already occupied")]
    Occupied,

    #[error("that move is suicide: the stone would have no liberties")]
    Suicide,

    #[error("that move would repeat an earlier board position")]
    RepeatedPosition,

    #[error("the game is already finished")]
    IllegalStateTransition,

    #[error("there is no move to undo")]
    NothingToUndo,
}
