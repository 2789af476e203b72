//! Move legality and state transitions.
//!
//! `Rules::try_place` runs the placement pipeline, each stage
//! short-circuiting:
//!
//! 1. bounds
//! 2. occupancy
//! 3. tentative placement on a cloned candidate
//! 4. removal of every opposing neighbor group left without liberties,
//!    all judged against the same candidate
//! 5. suicide: the mover's own group must have a liberty after captures
//! 6. positional superko: the resulting stones must not match any earlier
//!    snapshot, whoever was to move
//! 7. accept
//!
//! The input state is never touched; an accepted move returns a new
//! `BoardState`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::group::{group_at, Group};
use super::rejection::Rejection;
use crate::core::{BoardState, Color, GameConfig, Grid, PlayerId, Point, Position, ZobristKeys};
use crate::error::ConfigError;

/// Earlier snapshots that a new position must not repeat.
///
/// The provided impls compare fingerprints before cells, so the snapshots
/// must come from the same `Rules` as the position being checked.
pub trait PositionHistory {
    /// True if any snapshot has exactly these stones.
    fn contains_position(&self, position: &Position) -> bool;
}

impl PositionHistory for [BoardState] {
    fn contains_position(&self, position: &Position) -> bool {
        self.iter().any(|s| s.position().matches(position))
    }
}

impl PositionHistory for Vec<BoardState> {
    fn contains_position(&self, position: &Position) -> bool {
        self.as_slice().contains_position(position)
    }
}

impl PositionHistory for Vector<BoardState> {
    fn contains_position(&self, position: &Position) -> bool {
        self.iter().any(|s| s.position().matches(position))
    }
}

/// An accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The snapshot after the stone is placed and captures are removed.
    pub state: BoardState,

    /// Opposing stones removed by this move, sorted.
    pub captured: Vec<Point>,
}

/// Rules for one board size and table.
#[derive(Clone, Debug)]
pub struct Rules {
    grid: Grid,
    player_count: usize,
    keys: ZobristKeys,
}

impl Rules {
    /// Build rules from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid();
        Ok(Self {
            grid,
            player_count: config.player_count,
            keys: ZobristKeys::new(grid.len(), config.player_count, config.zobrist_seed),
        })
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Ply-0 snapshot of an empty board.
    #[must_use]
    pub fn empty_state(&self) -> BoardState {
        BoardState::initial(Position::empty(self.grid))
    }

    /// Ply-0 snapshot from a diagram, one string per row.
    ///
    /// Symbols are those of `Color::from_symbol`; whitespace is ignored, so
    /// `"0 1 0"` and `".X."` describe the same row. Groups without
    /// liberties are accepted as drawn.
    pub fn state_from_rows<S: AsRef<str>>(&self, rows: &[S]) -> Result<BoardState, ConfigError> {
        if rows.len() != self.grid.height() {
            return Err(ConfigError::RowCount {
                expected: self.grid.height(),
                found: rows.len(),
            });
        }

        let mut position = Position::empty(self.grid);
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != self.grid.width() {
                return Err(ConfigError::RowWidth {
                    row: r + 1,
                    expected: self.grid.width(),
                    found: symbols.len(),
                });
            }

            for (c, &symbol) in symbols.iter().enumerate() {
                let color = Color::from_symbol(symbol).ok_or(ConfigError::UnknownSymbol {
                    row: r + 1,
                    col: c + 1,
                    symbol,
                })?;
                let Some(owner) = color.owner() else {
                    continue;
                };
                if owner.index() >= self.player_count {
                    return Err(ConfigError::UnknownPlayer {
                        row: r + 1,
                        col: c + 1,
                        player: owner.index() + 1,
                        player_count: self.player_count,
                    });
                }
                position.set(&self.keys, Point::new(r as i32, c as i32), color);
            }
        }

        Ok(BoardState::initial(position))
    }

    /// Try to place `player`'s stone at `point`.
    ///
    /// `history` holds every snapshot the result must not repeat; a session
    /// passes its full history including `state` itself.
    pub fn try_place<H>(
        &self,
        state: &BoardState,
        point: Point,
        player: PlayerId,
        history: &H,
    ) -> Result<Placement, Rejection>
    where
        H: PositionHistory + ?Sized,
    {
        debug_assert_eq!(state.grid(), self.grid, "state from a different board");
        debug_assert!(player.index() < self.player_count);

        if !self.grid.contains(point) {
            return Err(Rejection::OutOfBounds);
        }

        let current = state.position();
        if current.color_at(point) != Some(Color::Empty) {
            return Err(Rejection::Occupied);
        }

        let mut candidate = current.clone();
        candidate.set(&self.keys, point, Color::Stone(player));

        // Judge every opposing neighbor group against the same candidate
        // before removing anything.
        let mut analyzed: Vec<Group> = Vec::with_capacity(4);
        for n in self.grid.neighbors(point) {
            let opposing = candidate
                .color_at(n)
                .is_some_and(|c| c.is_opponent_of(player));
            if !opposing || analyzed.iter().any(|g| g.contains(n)) {
                continue;
            }
            if let Some(group) = group_at(&candidate, n) {
                analyzed.push(group);
            }
        }

        let mut captured = Vec::new();
        for group in analyzed.iter().filter(|g| g.liberty_count() == 0) {
            debug!(owner = %group.owner(), size = group.size(), "group captured");
            for &stone in group.stones() {
                candidate.set(&self.keys, stone, Color::Empty);
                captured.push(stone);
            }
        }

        let own_liberties = group_at(&candidate, point).map_or(0, |g| g.liberty_count());
        if own_liberties == 0 {
            return Err(Rejection::Suicide);
        }

        let next = state.successor(candidate, player);
        if history.contains_position(next.position()) {
            return Err(Rejection::RepeatedPosition);
        }

        captured.sort_unstable();
        Ok(Placement {
            state: next,
            captured,
        })
    }

    /// Whether `try_place` would accept the move.
    #[must_use]
    pub fn is_legal<H>(&self, state: &BoardState, point: Point, player: PlayerId, history: &H) -> bool
    where
        H: PositionHistory + ?Sized,
    {
        self.try_place(state, point, player, history).is_ok()
    }

    /// Every point where `player` may play, row-major.
    #[must_use]
    pub fn legal_points<H>(&self, state: &BoardState, player: PlayerId, history: &H) -> Vec<Point>
    where
        H: PositionHistory + ?Sized,
    {
        self.grid
            .points()
            .filter(|&p| self.is_legal(state, p, player, history))
            .collect()
    }

    /// Snapshot after `player` passes: same stones, next ply.
    #[must_use]
    pub fn pass_state(&self, state: &BoardState, player: PlayerId) -> BoardState {
        state.successor(state.position().clone(), player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId(0);
    const B: PlayerId = PlayerId(1);

    fn rules(size: usize) -> Rules {
        Rules::new(&GameConfig::default().with_size(size)).unwrap()
    }

    fn place(rules: &Rules, state: &BoardState, point: Point, player: PlayerId) -> Result<Placement, Rejection> {
        rules.try_place(state, point, player, std::slice::from_ref(state))
    }

    #[test]
    fn test_simple_placement() {
        let rules = rules(5);
        let state = rules.empty_state();

        let placement = place(&rules, &state, Point::new(2, 2), A).unwrap();

        assert_eq!(placement.state.color_at(Point::new(2, 2)), Some(Color::PLAYER_A));
        assert_eq!(placement.state.turn_index(), 1);
        assert_eq!(placement.state.active_color(), Color::PLAYER_A);
        assert!(placement.captured.is_empty());
        // Input snapshot untouched.
        assert_eq!(state.color_at(Point::new(2, 2)), Some(Color::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let rules = rules(3);
        let state = rules.empty_state();

        for p in [Point::new(3, 0), Point::new(0, 3), Point::new(-1, 1)] {
            assert_eq!(place(&rules, &state, p, A), Err(Rejection::OutOfBounds));
        }
    }

    #[test]
    fn test_occupied_any_color() {
        let rules = rules(3);
        let state = rules.state_from_rows(&["X..", "...", "..O"]).unwrap();

        assert_eq!(place(&rules, &state, Point::new(0, 0), A), Err(Rejection::Occupied));
        assert_eq!(place(&rules, &state, Point::new(0, 0), B), Err(Rejection::Occupied));
        assert_eq!(place(&rules, &state, Point::new(2, 2), B), Err(Rejection::Occupied));
    }

    #[test]
    fn test_capture_single_stone() {
        let rules = rules(3);
        let state = rules.state_from_rows(&["0 1 0", "1 2 1", "0 0 0"]).unwrap();

        let placement = place(&rules, &state, Point::from_one_based(3, 2), A).unwrap();

        assert_eq!(placement.captured, vec![Point::new(1, 1)]);
        assert_eq!(placement.state.color_at(Point::new(1, 1)), Some(Color::Empty));
    }

    #[test]
    fn test_suicide_rejected() {
        let rules = rules(3);
        let state = rules.state_from_rows(&[".X.", "X.X", ".X."]).unwrap();

        assert_eq!(place(&rules, &state, Point::new(1, 1), B), Err(Rejection::Suicide));
        // Own stones around it are fine.
        assert!(place(&rules, &state, Point::new(1, 1), A).is_ok());
    }

    #[test]
    fn test_multi_stone_suicide() {
        let rules = rules(4);
        let state = rules.state_from_rows(&["OX..", ".X..", "XX..", "...."]).unwrap();

        // Filling (1,0) joins (0,0) into a group of two with no liberties.
        assert_eq!(place(&rules, &state, Point::new(1, 0), B), Err(Rejection::Suicide));
    }

    #[test]
    fn test_capture_beats_suicide() {
        let rules = rules(4);
        // O at (0,0) has one liberty at (1,0); X playing there has no
        // liberty until the O stone comes off.
        let state = rules.state_from_rows(&["OX..", ".O..", "O...", "...."]).unwrap();

        let placement = place(&rules, &state, Point::new(1, 0), A).unwrap();
        assert_eq!(placement.captured, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_simultaneous_multi_group_capture() {
        let rules = rules(3);
        let state = rules.state_from_rows(&["O.O", "XOX", ".X."]).unwrap();

        // (0,1) is the last liberty of all three separate O stones.
        let placement = place(&rules, &state, Point::new(0, 1), A).unwrap();

        assert_eq!(
            placement.captured,
            vec![Point::new(0, 0), Point::new(0, 2), Point::new(1, 1)]
        );
        assert_eq!(placement.state.position().stones_of(B), 0);
    }

    #[test]
    fn test_superko_against_any_history() {
        let rules = rules(3);
        let old = rules.state_from_rows(&["X..", "...", "..."]).unwrap();
        let current = rules.empty_state();

        let history = vec![old, current.clone()];
        assert_eq!(
            rules.try_place(&current, Point::new(0, 0), A, &history),
            Err(Rejection::RepeatedPosition)
        );
        // The same stones from the other player is a different position.
        assert!(rules.try_place(&current, Point::new(0, 0), B, &history).is_ok());
    }

    #[test]
    fn test_setup_positions_equal_across_seeds() {
        let a = Rules::new(&GameConfig::default().with_size(3)).unwrap();
        let b = Rules::new(&GameConfig::default().with_size(3).with_seed(1)).unwrap();
        let rows = ["X..", "...", "..."];

        let from_a = a.state_from_rows(&rows).unwrap();
        let from_b = b.state_from_rows(&rows).unwrap();

        assert_ne!(from_a.position().fingerprint(), from_b.position().fingerprint());
        assert_eq!(from_a.position(), from_b.position());
        assert!(from_a.same_position(&from_b));
    }

    #[test]
    fn test_legal_points_excludes_illegal() {
        let rules = rules(3);
        let state = rules.state_from_rows(&[".X.", "X.X", ".X."]).unwrap();

        let legal = rules.legal_points(&state, B, std::slice::from_ref(&state));
        // Corners are suicide for O, center too; no empty point is legal.
        assert!(legal.is_empty());

        let legal = rules.legal_points(&state, A, std::slice::from_ref(&state));
        assert_eq!(legal.len(), 5);
    }

    #[test]
    fn test_pass_state() {
        let rules = rules(3);
        let state = rules.empty_state();
        let passed = rules.pass_state(&state, B);

        assert!(passed.same_position(&state));
        assert_eq!(passed.turn_index(), 1);
        assert_eq!(passed.active_color(), Color::PLAYER_B);
    }

    #[test]
    fn test_setup_errors() {
        let rules = rules(3);

        assert_eq!(
            rules.state_from_rows(&["...", "..."]),
            Err(ConfigError::RowCount { expected: 3, found: 2 })
        );
        assert_eq!(
            rules.state_from_rows(&["...", "....", "..."]),
            Err(ConfigError::RowWidth { row: 2, expected: 3, found: 4 })
        );
        assert!(matches!(
            rules.state_from_rows(&["...", ".?.", "..."]),
            Err(ConfigError::UnknownSymbol { row: 2, col: 2, symbol: '?' })
        ));
        assert!(matches!(
            rules.state_from_rows(&["..3", "...", "..."]),
            Err(ConfigError::UnknownPlayer { player: 3, .. })
        ));
    }
}
