//! Zobrist fingerprints for stone occupancy.
//!
//! Every `(intersection, player)` pair gets a random 64-bit key; the
//! fingerprint of a position is the XOR of the keys of all stones on it.
//! Placing or removing a stone is one XOR, so positions carry their
//! fingerprint for free and superko comparison can reject almost every
//! non-matching history entry without touching the cells.
//!
//! Keys come from a seeded ChaCha8 stream, so the same seed always yields
//! the same table and fingerprints are reproducible across runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

/// Default seed for the key table.
pub const DEFAULT_ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic key table for one board size and player count.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    keys: Vec<u64>,
    player_count: usize,
    seed: u64,
}

impl ZobristKeys {
    /// Generate keys for `points` intersections and `player_count` players.
    #[must_use]
    pub fn new(points: usize, player_count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let keys = (0..points * player_count).map(|_| rng.gen::<u64>()).collect();
        Self {
            keys,
            player_count,
            seed,
        }
    }

    /// Key for `player`'s stone at row-major `index`.
    #[must_use]
    pub fn key(&self, index: usize, player: PlayerId) -> u64 {
        debug_assert!(player.index() < self.player_count);
        self.keys[index * self.player_count + player.index()]
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
