//! Random cube values.
//!
//! The engine never seeds or owns randomness itself: every component that
//! needs a cube value draws it from an injected [`RandomSource`]. [`GameRng`]
//! is the deterministic implementation used by default.
//!
//! ```
//! use slide_lama::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.next(1, 7), b.next(1, 7));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::{MAX_CUBE_VALUE, MIN_CUBE_VALUE};
use super::Cube;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// A value in `[min, max_exclusive)`.
    fn next(&mut self, min: i32, max_exclusive: i32) -> i32;

    /// A fresh non-empty cube.
    ///
    /// Values outside the cube range are clamped into it.
    fn next_cube(&mut self) -> Cube {
        let value = self
            .next(i32::from(MIN_CUBE_VALUE), i32::from(MAX_CUBE_VALUE) + 1)
            .clamp(i32::from(MIN_CUBE_VALUE), i32::from(MAX_CUBE_VALUE));
        Cube::new(value as u8)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self, min: i32, max_exclusive: i32) -> i32 {
        (**self).next(min, max_exclusive)
    }
}

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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        self.inner.gen_range(min..max_exclusive)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same no
/// matter how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
