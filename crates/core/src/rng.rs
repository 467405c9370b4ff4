//! RNG module - seeded random piece generation
//!
//! Each draw picks a shape kind uniformly from the 7 catalog entries and a
//! state tag uniformly from the non-empty byte range `1..=255`.
//!
//! The generator is a `ChaCha8Rng` seeded from a `u64`, so the same seed
//! always yields the same piece sequence on every platform.

use std::num::NonZeroU8;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::ShapeKind;

/// The game's pseudo-random generator
pub type GameRng = ChaCha8Rng;

/// Owned source of random pieces
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: GameRng,
    seed: u64,
}

impl PieceSource {
    /// Create a new piece source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw the next shape kind and state tag
    pub fn draw(&mut self) -> (ShapeKind, NonZeroU8) {
        let index = self.rng.random_range(0..ShapeKind::COUNT as u8);
        let kind = ShapeKind::from_index(index).unwrap_or(ShapeKind::O);
        let tag = NonZeroU8::new(self.rng.random_range(1..=u8::MAX)).unwrap_or(NonZeroU8::MAX);
        (kind, tag)
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
