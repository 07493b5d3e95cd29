//! Cache Replacement Policies.
//!
//! Implements the algorithms for selecting victim ways in a full set.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Random`: Random selection.

use std::fmt;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy.
pub mod random;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

/// Trait for cache replacement policies.
///
/// The cache reports every fill and every hit; the policy is consulted for a
/// victim only when the target set has no invalid way.
pub trait ReplacementPolicy: Send + fmt::Debug {
    /// Records that `way` of `set` was just filled with a new block.
    ///
    /// Called both for fills into empty ways and for refills of a victim.
    fn on_fill(&mut self, set: usize, way: usize);

    /// Records a hit on `way` of `set`.
    fn on_hit(&mut self, set: usize, way: usize);

    /// Selects a way of `set` to evict.
    ///
    /// # Returns
    ///
    /// A way index in `[0, ways)`. The set is known to be full.
    fn select_victim(&mut self, set: usize) -> usize;
}
