//! Board geometry.
//!
//! A `Grid` is a fixed `height × width` rectangle of intersections with
//! orthogonal adjacency and no wraparound. It is `Copy` and carries no
//! stones, so every position on the same board shares one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::point::Point;

/// Up to four in-bounds neighbors.
pub type Neighbors = SmallVec<[Point; 4]>;

/// Fixed board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    /// Create a grid.
    ///
    /// Panics on a zero dimension; `GameConfig::validate` is the checked path.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "Grid dimensions must be non-zero");
        Self { height, width }
    }

    /// Square grid.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of intersections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// Always false: grids have at least one intersection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `p` lies in `[0, height) × [0, width)`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.height && (p.col as usize) < self.width
    }

    /// In-bounds orthogonal neighbors of `p`: 4 in the interior, 3 on an
    /// edge, 2 in a corner.
    ///
    /// ```
    /// use go_engine::core::{Grid, Point};
    ///
    /// let grid = Grid::square(3);
    /// assert_eq!(grid.neighbors(Point::new(1, 1)).len(), 4);
    /// assert_eq!(grid.neighbors(Point::new(0, 1)).len(), 3);
    /// assert_eq!(grid.neighbors(Point::new(0, 0)).len(), 2);
    /// ```
    #[must_use]
    pub fn neighbors(&self, p: Point) -> Neighbors {
        p.orthogonal()
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Row-major index of `p`, or `None` when out of bounds.
    #[must_use]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.width + p.col as usize)
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        debug_assert!(index < self.len());
        Point::new((index / self.width) as i32, (index % self.width) as i32)
    }

    /// Every intersection in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).map(|i| self.point_at(i))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::square(9)
    }
}
