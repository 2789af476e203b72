//! Connected groups and their liberties.
//!
//! A group is the maximal set of orthogonally connected stones of one
//! player; its liberties are the distinct empty intersections touching any
//! member. Groups are never stored: they are recomputed from a position on
//! demand.
//!
//! The traversal is a worklist flood fill with a visited set, so each
//! intersection is expanded at most once and the cost is bounded by the
//! board size.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Color, PlayerId, Point, Position};

/// A maximal connected chain of one player's stones.
///
/// `stones` and `liberties` are sorted, so two analyses of the same
/// position compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    owner: PlayerId,
    stones: Vec<Point>,
    liberties: Vec<Point>,
}

impl Group {
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    /// Distinct empty points adjacent to the group.
    #[must_use]
    pub fn liberties(&self) -> &[Point] {
        &self.liberties
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.stones.binary_search(&p).is_ok()
    }

    /// One liberty left.
    #[must_use]
    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}

/// The group containing `origin`.
///
/// Returns `None` when `origin` is off the board or empty.
#[must_use]
pub fn group_at(position: &Position, origin: Point) -> Option<Group> {
    let owner = position.color_at(origin)?.owner()?;
    let grid = position.grid();

    let mut visited: FxHashSet<Point> = FxHashSet::default();
    let mut liberties: FxHashSet<Point> = FxHashSet::default();
    let mut stones = Vec::new();
    let mut worklist = vec![origin];
    visited.insert(origin);

    while let Some(p) = worklist.pop() {
        stones.push(p);
        for n in grid.neighbors(p) {
            match position.color_at(n) {
                Some(Color::Empty) => {
                    liberties.insert(n);
                }
                Some(Color::Stone(o)) if o == owner => {
                    if visited.insert(n) {
                        worklist.push(n);
                    }
                }
                _ => {}
            }
        }
    }

    stones.sort_unstable();
    let mut liberties: Vec<Point> = liberties.into_iter().collect();
    liberties.sort_unstable();

    Some(Group {
        owner,
        stones,
        liberties,
    })
}

/// The group at `origin` in `state` together with its liberty count.
#[must_use]
pub fn group_and_liberties(state: &BoardState, origin: Point) -> Option<(Group, usize)> {
    group_at(state.position(), origin).map(|g| {
        let count = g.liberty_count();
        (g, count)
    })
}

/// Every group on the board, in row-major order of each group's first stone.
///
/// Each stone belongs to exactly one returned group.
#[must_use]
pub fn groups(position: &Position) -> Vec<Group> {
    let mut assigned: FxHashSet<Point> = FxHashSet::default();
    let mut out = Vec::new();

    for (p, color) in position.iter() {
        if color.is_empty() || assigned.contains(&p) {
            continue;
        }
        if let Some(group) = group_at(position, p) {
            assigned.extend(group.stones.iter().copied());
            out.push(group);
        }
    }

    out
}
