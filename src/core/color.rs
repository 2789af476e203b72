//! Intersection contents.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What occupies an intersection: nothing, or one player's stone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Empty,
    Stone(PlayerId),
}

impl Color {
    /// First player's stones.
    pub const PLAYER_A: Color = Color::Stone(PlayerId(0));
    /// Second player's stones.
    pub const PLAYER_B: Color = Color::Stone(PlayerId(1));

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Color::Empty)
    }

    /// The owning player, if a stone is present.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Color::Empty => None,
            Color::Stone(p) => Some(p),
        }
    }

    /// True for a stone that belongs to anyone other than `player`.
    #[must_use]
    pub fn is_opponent_of(self, player: PlayerId) -> bool {
        matches!(self, Color::Stone(p) if p != player)
    }

    /// Single-character board symbol.
    ///
    /// `.` empty, `X` first player, `O` second player, and the 1-based
    /// player number for anyone after that.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Stone(PlayerId(0)) => 'X',
            Color::Stone(PlayerId(1)) => 'O',
            Color::Stone(PlayerId(n)) => char::from_digit(u32::from(n) + 1, 36).unwrap_or('?'),
        }
    }

    /// Parse a board symbol.
    ///
    /// Accepts everything `symbol` produces plus digit notation, where
    /// `0` is empty and `1`..`9` are players 1..9.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '0' | '+' => Some(Color::Empty),
            'X' | 'x' => Some(Color::PLAYER_A),
            'O' | 'o' => Some(Color::PLAYER_B),
            '1'..='9' => symbol
                .to_digit(10)
                .map(|d| Color::Stone(PlayerId::new(d as u8 - 1))),
            _ => None,
        }
    }
}

impl From<PlayerId> for Color {
    fn from(player: PlayerId) -> Self {
        Color::Stone(player)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Empty => write!(f, "empty"),
            Color::Stone(p) => write!(f, "{} ({})", p, self.symbol()),
        }
    }
}
