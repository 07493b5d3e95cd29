//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the block that was filled earliest, regardless of how
//! recently it was hit. Each fill appends the way to an insertion queue and a
//! victim is taken from the head of that queue; the refilled way is then
//! appended again by the following `on_fill`.
//!
//! Queues are kept per set by default. The cache-wide scope pools every set's
//! fills into one queue of bare way indices, which is only true FIFO for
//! direct-mapped or single-set caches.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_fill()`: O(1) amortized
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict frequently-used lines)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::config::FifoScope;

/// FIFO Policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Insertion order of filled ways; one queue per set, or a single shared queue.
    queues: Vec<VecDeque<usize>>,
    scope: FifoScope,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    /// * `scope` - Whether insertion order is tracked per set or cache-wide.
    pub fn new(sets: usize, ways: usize, scope: FifoScope) -> Self {
        let queues = match scope {
            FifoScope::PerSet => (0..sets).map(|_| VecDeque::with_capacity(ways)).collect(),
            FifoScope::CacheWide => vec![VecDeque::with_capacity(sets * ways)],
        };
        Self { queues, scope }
    }

    /// Queue that owns `set`'s insertion order.
    #[inline]
    fn queue_mut(&mut self, set: usize) -> &mut VecDeque<usize> {
        match self.scope {
            FifoScope::PerSet => &mut self.queues[set],
            FifoScope::CacheWide => &mut self.queues[0],
        }
    }

    /// Total queued entries across all queues.
    pub fn len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// True when no fill has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn on_fill(&mut self, set: usize, way: usize) {
        self.queue_mut(set).push_back(way);
    }

    /// Hits do not change insertion order.
    fn on_hit(&mut self, _set: usize, _way: usize) {}

    /// Pops the head of the queue.
    ///
    /// A full set always has queued fills, so the fallback to way 0 is unreachable.
    fn select_victim(&mut self, set: usize) -> usize {
        let queue = self.queue_mut(set);
        debug_assert!(!queue.is_empty(), "FIFO victim requested for set {set} with no queued fill");
        queue.pop_front().unwrap_or(0)
    }
}
