//! Random Replacement Policy.
//!
//! This policy evicts a uniformly chosen way from the set. Victims are drawn
//! from a `ChaCha8` generator so that a fixed seed reproduces a run exactly;
//! without a seed one is drawn from the thread RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::ReplacementPolicy;

/// Random Policy state.
#[derive(Debug)]
pub struct RandomPolicy {
    /// Number of ways in the cache.
    ways: usize,
    /// Seed the generator was built from.
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a new Random policy instance.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the cache.
    /// * `seed` - Generator seed; `None` draws a fresh one.
    pub fn new(ways: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        debug!(seed, "random replacement seeded");
        Self {
            ways,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed in use, for reproducing a run.
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Access patterns do not affect random replacement.
    fn on_fill(&mut self, _set: usize, _way: usize) {}

    fn on_hit(&mut self, _set: usize, _way: usize) {}

    fn select_victim(&mut self, _set: usize) -> usize {
        self.rng.gen_range(0..self.ways)
    }
}
