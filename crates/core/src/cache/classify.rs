//! Miss classification.
//!
//! Labels a miss before any eviction takes place:
//! 1. **Compulsory:** the target set still has an invalid way.
//! 2. **Capacity:** the target set is full and so is every other set.
//! 3. **Conflict:** the target set is full but free slots remain elsewhere.
//!
//! A single-set cache can never report a conflict miss, since its only set is
//! the whole cache.

use std::fmt;

use serde::Serialize;

use super::store::SetAssociativeStore;

/// Kind of cache miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissKind {
    /// First fill of a slot in the target set.
    Compulsory,
    /// Whole cache is saturated.
    Capacity,
    /// Target set is saturated while other sets have room.
    Conflict,
}

impl fmt::Display for MissKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compulsory => "compulsory",
            Self::Capacity => "capacity",
            Self::Conflict => "conflict",
        };
        f.write_str(name)
    }
}

/// Classifies a miss on `set`. Does not modify the store.
pub fn classify_miss(store: &SetAssociativeStore, set: usize) -> MissKind {
    if store.find_empty_way(set).is_some() {
        MissKind::Compulsory
    } else if store.sets() == 1 || store.is_full() {
        MissKind::Capacity
    } else {
        MissKind::Conflict
    }
}
