//! Board snapshots.
//!
//! ## Position
//!
//! Stone occupancy over a grid plus its Zobrist fingerprint. Equality is
//! structural: same grid, same stone on every intersection. The
//! fingerprint depends on the key table that built the position, so it
//! takes no part in equality; `matches` uses it as a pre-filter between
//! positions built by the same `Rules`.
//!
//! A deserialized position is checked for a cell per intersection. Its
//! fingerprint is trusted as written.
//!
//! ## BoardState
//!
//! A `Position` plus the ply count that reached it and the color of the
//! mover that produced it. BoardStates are never modified once built;
//! every rule transition yields a new one. Cells live in an `im::Vector`,
//! so a successor shares all untouched chunks with its predecessor and the
//! session can keep the whole game history cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::color::Color;
use super::grid::Grid;
use super::player::PlayerId;
use super::point::Point;
use super::zobrist::ZobristKeys;

/// Stone occupancy of every intersection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    grid: Grid,
    cells: Vector<Color>,
    fingerprint: u64,
}

#[derive(Deserialize)]
struct RawPosition {
    grid: Grid,
    cells: Vector<Color>,
    fingerprint: u64,
}

impl TryFrom<RawPosition> for Position {
    type Error = ConfigError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let RawPosition { grid, cells, fingerprint } = raw;
        if grid.height() == 0 || grid.width() == 0 {
            return Err(ConfigError::InvalidDimensions {
                height: grid.height(),
                width: grid.width(),
                max: super::config::MAX_BOARD_SIDE,
            });
        }
        if cells.len() != grid.len() {
            return Err(ConfigError::CellCount {
                expected: grid.len(),
                found: cells.len(),
            });
        }
        Ok(Self { grid, cells, fingerprint })
    }
}

impl Position {
    /// An empty board.
    #[must_use]
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            cells: std::iter::repeat(Color::Empty).take(grid.len()).collect(),
            fingerprint: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Zobrist fingerprint (0 for the empty board).
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Contents of `p`, or `None` off the board.
    #[must_use]
    pub fn color_at(&self, p: Point) -> Option<Color> {
        self.grid.index(p).map(|i| self.cells[i])
    }

    /// Number of stones of any color.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of `player`'s stones.
    #[must_use]
    pub fn stones_of(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Color::Stone(player))
            .count()
    }

    /// Every `(point, color)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.grid.point_at(i), c))
    }

    /// Overwrite one in-bounds intersection, keeping the fingerprint in step.
    ///
    /// Only called on freshly cloned candidates; snapshots already handed
    /// out are never touched.
    pub(crate) fn set(&mut self, keys: &ZobristKeys, p: Point, color: Color) {
        let Some(index) = self.grid.index(p) else {
            debug_assert!(false, "set called with off-board point {p}");
            return;
        };
        let old = self.cells.set(index, color);
        if let Some(owner) = old.owner() {
            self.fingerprint ^= keys.key(index, owner);
        }
        if let Some(owner) = color.owner() {
            self.fingerprint ^= keys.key(index, owner);
        }
    }

    /// Equality with a fingerprint shortcut. Both positions must come from
    /// the same key table, as every snapshot of one game does.
    pub(crate) fn matches(&self, other: &Position) -> bool {
        self.fingerprint == other.fingerprint && self == other
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.cells == other.cells
    }
}

impl Eq for Position {}

impl std::hash::Hash for Position {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.cells.hash(state);
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let i = row * self.grid.width() + col;
                write!(f, "{}", self.cells[i].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An immutable snapshot of the game after some number of plies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    position: Position,
    turn_index: u32,
    active_color: Color,
}

impl BoardState {
    /// Starting snapshot: ply 0, produced by nobody.
    #[must_use]
    pub fn initial(position: Position) -> Self {
        Self {
            position,
            turn_index: 0,
            active_color: Color::Empty,
        }
    }

    /// The snapshot that follows this one when `mover` produces `position`.
    #[must_use]
    pub(crate) fn successor(&self, position: Position, mover: PlayerId) -> Self {
        Self {
            position,
            turn_index: self.turn_index + 1,
            active_color: Color::Stone(mover),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.position.grid()
    }

    /// Plies played to reach this snapshot.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// Color of the mover that produced this snapshot; `Empty` for ply 0.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Contents of `p`, or `None` off the board.
    #[must_use]
    pub fn color_at(&self, p: Point) -> Option<Color> {
        self.position.color_at(p)
    }

    /// Positional equality: same stones, regardless of ply or mover.
    #[must_use]
    pub fn same_position(&self, other: &BoardState) -> bool {
        self.position == other.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(grid: Grid) -> ZobristKeys {
        ZobristKeys::new(grid.len(), 2, 7)
    }

    #[test]
    fn test_empty_position() {
        let pos = Position::empty(Grid::square(5));
        assert_eq!(pos.stone_count(), 0);
        assert_eq!(pos.fingerprint(), 0);
        assert_eq!(pos.color_at(Point::new(4, 4)), Some(Color::Empty));
        assert_eq!(pos.color_at(Point::new(5, 0)), None);
    }

    #[test]
    fn test_set_updates_fingerprint_reversibly() {
        let grid = Grid::square(5);
        let keys = keys(grid);
        let empty = Position::empty(grid);

        let mut pos = empty.clone();
        pos.set(&keys, Point::new(2, 2), Color::PLAYER_A);
        assert_ne!(pos.fingerprint(), 0);
        assert_eq!(pos.stones_of(PlayerId::new(0)), 1);

        pos.set(&keys, Point::new(2, 2), Color::Empty);
        assert_eq!(pos, empty);
        assert_eq!(pos.fingerprint(), 0);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let grid = Grid::square(3);
        let keys = keys(grid);
        let original = Position::empty(grid);

        let mut candidate = original.clone();
        candidate.set(&keys, Point::new(0, 0), Color::PLAYER_B);

        assert_eq!(original.color_at(Point::new(0, 0)), Some(Color::Empty));
        assert_eq!(candidate.color_at(Point::new(0, 0)), Some(Color::PLAYER_B));
    }

    #[test]
    fn test_fingerprint_order_independent() {
        let grid = Grid::square(4);
        let keys = keys(grid);

        let mut a = Position::empty(grid);
        a.set(&keys, Point::new(0, 1), Color::PLAYER_A);
        a.set(&keys, Point::new(3, 2), Color::PLAYER_B);

        let mut b = Position::empty(grid);
        b.set(&keys, Point::new(3, 2), Color::PLAYER_B);
        b.set(&keys, Point::new(0, 1), Color::PLAYER_A);

        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_successor_metadata() {
        let state = BoardState::initial(Position::empty(Grid::square(3)));
        assert_eq!(state.turn_index(), 0);
        assert_eq!(state.active_color(), Color::Empty);

        let next = state.successor(state.position().clone(), PlayerId::new(1));
        assert_eq!(next.turn_index(), 1);
        assert_eq!(next.active_color(), Color::PLAYER_B);
        assert!(next.same_position(&state));
        assert_ne!(next, state);
    }

    #[test]
    fn test_display() {
        let grid = Grid::new(2, 3);
        let keys = keys(grid);
        let mut pos = Position::empty(grid);
        pos.set(&keys, Point::new(0, 2), Color::PLAYER_A);
        pos.set(&keys, Point::new(1, 0), Color::PLAYER_B);

        assert_eq!(pos.to_string(), "..X\nO..\n");
    }

    #[test]
    fn test_serialization() {
        let grid = Grid::square(3);
        let keys = keys(grid);
        let mut pos = Position::empty(grid);
        pos.set(&keys, Point::new(1, 1), Color::PLAYER_A);
        let state = BoardState::initial(pos);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
        assert_eq!(deserialized.position().fingerprint(), state.position().fingerprint());
    }

    #[test]
    fn test_equality_ignores_key_table() {
        let grid = Grid::square(3);
        let mut a = Position::empty(grid);
        a.set(&ZobristKeys::new(grid.len(), 2, 1), Point::new(0, 0), Color::PLAYER_A);
        let mut b = Position::empty(grid);
        b.set(&ZobristKeys::new(grid.len(), 2, 2), Point::new(0, 0), Color::PLAYER_A);

        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a, b);
        assert!(BoardState::initial(a).same_position(&BoardState::initial(b)));
    }

    #[test]
    fn test_matches_uses_fingerprint_and_cells() {
        let grid = Grid::square(3);
        let keys = keys(grid);
        let mut a = Position::empty(grid);
        a.set(&keys, Point::new(1, 1), Color::PLAYER_B);
        let mut b = Position::empty(grid);
        b.set(&keys, Point::new(1, 1), Color::PLAYER_B);

        assert!(a.matches(&b));
        b.set(&keys, Point::new(0, 0), Color::PLAYER_A);
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"grid":{"height":2,"width":2},"cells":["Empty"],"fingerprint":0}"#;
        let err = serde_json::from_str::<Position>(json).unwrap_err();
        assert!(err.to_string().contains("4 intersections"), "{err}");

        let json = r#"{"grid":{"height":0,"width":2},"cells":[],"fingerprint":0}"#;
        assert!(serde_json::from_str::<Position>(json).is_err());
    }
}
