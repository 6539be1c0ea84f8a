//! Deterministic shape generation for computer-controlled players.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of shapes
//! - **Forkable**: Derive independent streams for each seat from one seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rps_tally::ShapeRng;
//!
//! let mut rng = ShapeRng::new(7);
//! let mut p2_rng = rng.fork();
//!
//! let mut replay = ShapeRng::new(7);
//! let mut p2_replay = replay.fork();
//! assert_eq!(p2_rng.gen_shape(), p2_replay.gen_shape());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::shape::HandShape;

/// Seeded RNG that produces hand shapes.
///
/// Uses ChaCha8 so a stream can be restored from its word position.
#[derive(Clone, Debug)]
pub struct ShapeRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl ShapeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw a uniformly random hand shape.
    pub fn gen_shape(&mut self) -> HandShape {
        HandShape::ALL[self.inner.gen_range(0..HandShape::ALL.len())]
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ShapeRngState {
        ShapeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ShapeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
