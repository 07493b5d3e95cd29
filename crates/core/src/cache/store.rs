//! Set-associative block storage.
//!
//! Slots are held in a flat vector indexed by `set * ways + way`, so every
//! per-set scan walks a contiguous slice. A slot starts invalid, becomes valid
//! on its first fill and is afterwards only ever overwritten in place.
//!
//! # Invariants
//!
//! - At most `ways` valid slots per set (trivially, there are only `ways` slots).
//! - No two valid slots in the same set share a tag; callers only install a tag
//!   after `find_block` reported it absent.
//! - `occupied` equals the number of valid slots.

/// One block slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockSlot {
    /// Whether the slot holds a block.
    pub valid: bool,
    /// Tag of the resident block; meaningless while `valid` is false.
    pub tag: u32,
}

/// Valid/tag state for every (set, way) pair.
#[derive(Clone, Debug)]
pub struct SetAssociativeStore {
    slots: Vec<BlockSlot>,
    sets: usize,
    ways: usize,
    occupied: usize,
}

impl SetAssociativeStore {
    /// Creates a store of `sets * ways` invalid slots.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            slots: vec![BlockSlot::default(); sets * ways],
            sets,
            ways,
            occupied: 0,
        }
    }

    /// Number of sets.
    #[inline(always)]
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Ways per set.
    #[inline(always)]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Total slot count.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of valid slots.
    #[inline(always)]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Slots belonging to `set`, way 0 first.
    #[inline]
    pub fn set(&self, set: usize) -> &[BlockSlot] {
        let base = set * self.ways;
        &self.slots[base..base + self.ways]
    }

    /// Way holding a valid block tagged `tag` in `set`, if any.
    #[inline]
    pub fn find_block(&self, set: usize, tag: u32) -> Option<usize> {
        self.set(set)
            .iter()
            .position(|slot| slot.valid && slot.tag == tag)
    }

    /// Lowest-numbered invalid way in `set`, if any.
    #[inline]
    pub fn find_empty_way(&self, set: usize) -> Option<usize> {
        self.set(set).iter().position(|slot| !slot.valid)
    }

    /// True when every slot of every set is valid.
    pub fn is_full(&self) -> bool {
        debug_assert_eq!(
            self.occupied == self.capacity(),
            self.slots.iter().all(|slot| slot.valid)
        );
        self.occupied == self.capacity()
    }

    /// Marks `(set, way)` valid with `tag`, returning the tag it displaced.
    pub fn install(&mut self, set: usize, way: usize, tag: u32) -> Option<u32> {
        let slot = &mut self.slots[set * self.ways + way];
        let evicted = slot.valid.then_some(slot.tag);
        if !slot.valid {
            self.occupied += 1;
        }
        *slot = BlockSlot { valid: true, tag };
        evicted
    }
}
