//! Board intersections.
//!
//! A `Point` is a plain `(row, col)` value. Rows run top to bottom and
//! columns left to right, both 0-based. Coordinates are signed so that a
//! caller can hand the engine any integer pair and get `OutOfBounds` back
//! instead of having to pre-filter negatives.

use serde::{Deserialize, Serialize};

/// A board intersection, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a point from 0-based coordinates.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Create a point from 1-based (human) coordinates.
    ///
    /// ```
    /// use go_engine::core::Point;
    ///
    /// assert_eq!(Point::from_one_based(2, 3), Point::new(1, 2));
    /// ```
    #[must_use]
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    /// The orthogonal offsets, without any board bounds checking.
    ///
    /// Order is up, left, right, down. Offsets past the `i32` range are
    /// skipped.
    pub fn orthogonal(self) -> impl Iterator<Item = Point> {
        let Point { row, col } = self;
        [
            row.checked_sub(1).map(|r| Point::new(r, col)),
            col.checked_sub(1).map(|c| Point::new(row, c)),
            col.checked_add(1).map(|c| Point::new(row, c)),
            row.checked_add(1).map(|r| Point::new(r, col)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
