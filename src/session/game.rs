//! A game in progress.
//!
//! `GameSession` owns the snapshot history, the move log, the capture
//! tallies and whose turn it is. It is a two-state machine:
//!
//! - `AwaitingMove`: `place`, `pass`, `resign` and `undo` are accepted.
//! - `Finished`: every mutating call returns
//!   `Rejection::IllegalStateTransition`; queries still work.
//!
//! A rejected call changes nothing except `last_rejection`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{BoardState, Color, GameConfig, Grid, PlayerId, PlayerMap, Point};
use crate::error::ConfigError;
use crate::rules::{group_at, Group, Rejection, Rules};

/// What a player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place(Point),
    Pass,
    Resign,
}

/// One entry of the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// What they did.
    pub mv: Move,

    /// Ply index of the snapshot the move produced. A resignation produces
    /// no snapshot and carries the index of the last one.
    pub turn: u32,

    /// Stones removed by a placement, sorted.
    pub captured: Vec<Point>,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// Every player passed in a row.
    AllPassed,
    /// This player resigned.
    Resigned(PlayerId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    AwaitingMove,
    Finished(GameEnd),
}

/// A single game: history, turn order, tallies.
///
/// Drive it from one caller at a time; hosts that share a session across
/// threads must serialize access themselves.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: Rules,
    history: Vector<BoardState>,
    log: Vector<MoveRecord>,
    captures: PlayerMap<u32>,
    consecutive_passes: usize,
    active_player: PlayerId,
    status: SessionStatus,
    last_rejection: Option<Rejection>,
}

impl GameSession {
    /// New game on an empty board.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rules = Rules::new(config)?;
        let initial = rules.empty_state();
        Ok(Self::start(rules, initial))
    }

    /// New game from a setup diagram (see `Rules::state_from_rows`).
    ///
    /// The diagram becomes history entry 0 and the first player moves next.
    pub fn with_setup<S: AsRef<str>>(config: &GameConfig, rows: &[S]) -> Result<Self, ConfigError> {
        let rules = Rules::new(config)?;
        let initial = rules.state_from_rows(rows)?;
        Ok(Self::start(rules, initial))
    }

    fn start(rules: Rules, initial: BoardState) -> Self {
        let player_count = rules.player_count();
        debug!(
            height = rules.grid().height(),
            width = rules.grid().width(),
            player_count,
            "session started"
        );
        Self {
            rules,
            history: Vector::unit(initial),
            log: Vector::new(),
            captures: PlayerMap::with_default(player_count),
            consecutive_passes: 0,
            active_player: PlayerId::new(0),
            status: SessionStatus::AwaitingMove,
            last_rejection: None,
        }
    }

    // === Turn operations ===

    /// Place the active player's stone at `point`.
    ///
    /// On success the turn passes to the next player and the log entry is
    /// returned. On rejection the same player is still to move.
    pub fn place(&mut self, point: Point) -> Result<MoveRecord, Rejection> {
        self.ensure_awaiting()?;

        let player = self.active_player;
        let placement = match self
            .rules
            .try_place(self.current_state(), point, player, &self.history)
        {
            Ok(p) => p,
            Err(rejection) => return Err(self.reject(rejection)),
        };

        let record = MoveRecord {
            player,
            mv: Move::Place(point),
            turn: placement.state.turn_index(),
            captured: placement.captured,
        };
        debug!(%player, %point, captured = record.captured.len(), "stone placed");

        self.captures[player] += record.captured.len() as u32;
        self.history.push_back(placement.state);
        self.log.push_back(record.clone());
        self.consecutive_passes = 0;
        self.active_player = player.next(self.player_count());
        self.last_rejection = None;

        Ok(record)
    }

    /// Pass the turn.
    ///
    /// Returns the status afterwards: the game finishes once every player
    /// has passed in a row.
    pub fn pass(&mut self) -> Result<SessionStatus, Rejection> {
        self.ensure_awaiting()?;

        let player = self.active_player;
        let next = self.rules.pass_state(self.current_state(), player);
        self.log.push_back(MoveRecord {
            player,
            mv: Move::Pass,
            turn: next.turn_index(),
            captured: Vec::new(),
        });
        self.history.push_back(next);
        self.consecutive_passes += 1;
        self.active_player = player.next(self.player_count());
        self.last_rejection = None;
        debug!(%player, consecutive = self.consecutive_passes, "passed");

        if self.consecutive_passes == self.player_count() {
            self.finish(GameEnd::AllPassed);
        }
        Ok(self.status)
    }

    /// The active player resigns and the game finishes.
    pub fn resign(&mut self) -> Result<(), Rejection> {
        self.ensure_awaiting()?;

        let player = self.active_player;
        self.log.push_back(MoveRecord {
            player,
            mv: Move::Resign,
            turn: self.current_state().turn_index(),
            captured: Vec::new(),
        });
        self.last_rejection = None;
        self.finish(GameEnd::Resigned(player));
        Ok(())
    }

    /// Take back the latest placement or pass.
    ///
    /// Restores the previous snapshot, mover, tallies and pass streak.
    pub fn undo(&mut self) -> Result<MoveRecord, Rejection> {
        self.ensure_awaiting()?;

        let Some(record) = self.log.pop_back() else {
            return Err(self.reject(Rejection::NothingToUndo));
        };
        self.history.pop_back();
        self.captures[record.player] -= record.captured.len() as u32;
        self.active_player = record.player;
        self.consecutive_passes = self
            .log
            .iter()
            .rev()
            .take_while(|r| r.mv == Move::Pass)
            .count();
        self.last_rejection = None;
        debug!(player = %record.player, mv = ?record.mv, "undone");

        Ok(record)
    }

    fn ensure_awaiting(&mut self) -> Result<(), Rejection> {
        match self.status {
            SessionStatus::AwaitingMove => Ok(()),
            SessionStatus::Finished(_) => Err(self.reject(Rejection::IllegalStateTransition)),
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Rejection {
        debug!(player = %self.active_player, %rejection, "move rejected");
        self.last_rejection = Some(rejection);
        rejection
    }

    fn finish(&mut self, end: GameEnd) {
        info!(?end, plies = self.current_state().turn_index(), "game finished");
        self.status = SessionStatus::Finished(end);
    }

    // === Queries ===

    /// The latest snapshot.
    #[must_use]
    pub fn current_state(&self) -> &BoardState {
        &self.history[self.history.len() - 1]
    }

    /// Every snapshot so far; index 0 is the starting board.
    #[must_use]
    pub fn history(&self) -> &Vector<BoardState> {
        &self.history
    }

    /// Every accepted move in order.
    #[must_use]
    pub fn moves(&self) -> &Vector<MoveRecord> {
        &self.log
    }

    /// Player to move next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Stone color of the player to move next.
    #[must_use]
    pub fn active_color(&self) -> Color {
        Color::Stone(self.active_player)
    }

    /// Why the most recent call was refused; cleared by the next accepted one.
    #[must_use]
    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    /// Opposing stones `player` has captured.
    #[must_use]
    pub fn captures(&self, player: PlayerId) -> u32 {
        self.captures[player]
    }

    #[must_use]
    pub fn capture_tallies(&self) -> &PlayerMap<u32> {
        &self.captures
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished(_))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rules.player_count()
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.rules.grid()
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Points where the active player may play; empty once finished.
    #[must_use]
    pub fn legal_points(&self) -> Vec<Point> {
        if self.is_finished() {
            return Vec::new();
        }
        self.rules
            .legal_points(self.current_state(), self.active_player, &self.history)
    }

    /// Group at `point` on the current board.
    #[must_use]
    pub fn group_at(&self, point: Point) -> Option<Group> {
        group_at(self.current_state().position(), point)
    }
}
