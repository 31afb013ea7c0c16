//! Deterministic dice and decision randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Context streams**: Independent streams for dice and AI decisions,
//!   derived with a fixed hash so replays survive toolchain upgrades
//!
//! ```
//! use dont_shut_the_box::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_dice(2).unwrap(), b.roll_dice(2).unwrap());
//!
//! let sum = a.roll_dice(1).unwrap();
//! assert!((1..=6).contains(&sum));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use super::error::{GameError, Result};

/// Faces on one die.
pub const DIE_FACES: u8 = 6;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Independent stream for a named purpose ("dice", "ai", ...).
    ///
    /// The same context always yields the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll `count` dice (1 or 2) and return their sum.
    pub fn roll_dice(&mut self, count: u8) -> Result<u8> {
        match count {
            1 | 2 => Ok((0..count).map(|_| self.roll_die()).sum()),
            other => Err(GameError::InvalidDiceCount(other)),
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// Seed for a named stream. `FxHasher` is fixed across Rust releases, unlike
/// the std `DefaultHasher`.
fn context_seed(seed: u64, context: &str) -> u64 {
    let mut hasher = FxHasher::default();
    seed.hash(&mut hasher);
    context.hash(&mut hasher);
    hasher.finish()
}
