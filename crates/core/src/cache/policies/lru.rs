//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the block that has gone longest without a hit or fill.
//! Every slot carries a recency stamp taken from a single counter owned by the
//! policy; each hit or fill stamps the slot with the current value and then
//! advances it. The slot with the smallest stamp in a set is the LRU way.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()` / `on_fill()`: O(1)
//!   - `select_victim()`: O(W) where W is the number of ways (associativity)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Best Case:** Workloads with good temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Recency stamp per slot, indexed by `set * ways + way`.
    stamps: Vec<u64>,
    ways: usize,
    /// Next stamp to hand out; strictly increasing.
    clock: u64,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            stamps: vec![0; sets * ways],
            ways,
            clock: 0,
        }
    }

    /// Current value of the recency counter.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    #[inline]
    fn stamp(&mut self, set: usize, way: usize) {
        self.stamps[set * self.ways + way] = self.clock;
        self.clock += 1;
    }
}

impl ReplacementPolicy for LruPolicy {
    fn on_fill(&mut self, set: usize, way: usize) {
        self.stamp(set, way);
    }

    fn on_hit(&mut self, set: usize, way: usize) {
        self.stamp(set, way);
    }

    /// Returns the way with the smallest stamp; ties go to the lowest way.
    fn select_victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        self.stamps[base..base + self.ways]
            .iter()
            .enumerate()
            .min_by_key(|&(_, stamp)| *stamp)
            .map_or(0, |(way, _)| way)
    }
}
