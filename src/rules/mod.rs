//! Rules: group analysis and move validation.
//!
//! Everything here is a pure function of its inputs. Snapshots go in,
//! new snapshots or a `Rejection` come out; nothing is mutated.

pub mod group;
pub mod rejection;
pub mod validator;

pub use group::{group_and_liberties, group_at, groups, Group};
pub use rejection::Rejection;
pub use validator::{Placement, PositionHistory, Rules};
