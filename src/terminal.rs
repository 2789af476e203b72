//! Text front end helpers for the terminal harness.
//!
//! Humans type 1-based `"<row> <col>"` pairs or a word command; the board is
//! drawn with 1-based row and column labels.

use std::fmt::Write as _;

use crate::core::{BoardState, Point};
use crate::session::{GameEnd, GameSession, SessionStatus};

/// A line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(Point),
    Pass,
    Resign,
    Undo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized input {0:?}: type \"<row> <col>\", pass, resign or undo")]
    Unrecognized(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// ```
/// use go_engine::core::Point;
/// use go_engine::terminal::{parse_command, Command};
///
/// assert_eq!(parse_command("3 4"), Ok(Some(Command::Place(Point::new(2, 3)))));
/// assert_eq!(parse_command("pass"), Ok(Some(Command::Pass)));
/// assert_eq!(parse_command("  "), Ok(None));
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let command = match tokens.as_slice() {
        [] => return Ok(None),
        [word] => match word.to_ascii_lowercase().as_str() {
            "pass" | "p" => Command::Pass,
            "resign" => Command::Resign,
            "undo" | "u" => Command::Undo,
            _ => return Err(ParseError::Unrecognized(trimmed.to_string())),
        },
        [row, col] => match (row.parse::<i32>(), col.parse::<i32>()) {
            (Ok(r), Ok(c)) => Command::Place(Point::from_one_based(r, c)),
            _ => return Err(ParseError::Unrecognized(trimmed.to_string())),
        },
        _ => return Err(ParseError::Unrecognized(trimmed.to_string())),
    };
    Ok(Some(command))
}

/// Draw a snapshot with 1-based labels.
#[must_use]
pub fn render(state: &BoardState) -> String {
    let grid = state.grid();
    let mut out = String::from("   ");
    for col in 1..=grid.width() {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..grid.height() {
        let _ = write!(out, "{:>3}", row + 1);
        for col in 0..grid.width() {
            let symbol = state
                .color_at(Point::new(row as i32, col as i32))
                .map_or('?', |c| c.symbol());
            let _ = write!(out, "{symbol:>3}");
        }
        out.push('\n');
    }
    out
}

/// End-of-game report: how it ended and each player's captures.
#[must_use]
pub fn summary(session: &GameSession) -> String {
    let mut out = match session.status() {
        SessionStatus::AwaitingMove => String::from("Game in progress."),
        SessionStatus::Finished(GameEnd::AllPassed) => String::from("All players passed. Game over."),
        SessionStatus::Finished(GameEnd::Resigned(p)) => format!("{p} resigned. Game over."),
    };
    for (player, captured) in session.capture_tallies().iter() {
        let _ = write!(out, "\n{player} captured {captured}");
    }
    out
}
