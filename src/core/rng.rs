//! Injected random source for shuffles and replacement draws.
//!
//! Nothing in the engine touches a global RNG. A `Session` owns one
//! `GameRng` and hands each `Round` a fork of it, so a session seeded with
//! the same value replays the same deals.
//!
//! ```
//! use hilo_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new round
//! let mut round_rng = rng.fork();
//!
//! // Forks are deterministic: same parent seed and fork count, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut round_rng2 = rng2.fork();
//! assert_eq!(round_rng.gen_range_usize(0..100), round_rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state, e.g. for reproducing a reported session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
