//! Set-Associative Cache Simulator.
//!
//! This module implements a functional set-associative cache model. Each
//! access runs the same sequence:
//! 1. **Decode:** split the address into tag and set index.
//! 2. **Lookup:** a valid slot with a matching tag is a hit.
//! 3. **Classify:** a miss is labelled compulsory, capacity, or conflict.
//! 4. **Place:** fill the lowest empty way, or evict the policy's victim.
//! 5. **Count:** fold the outcome into the running statistics.
//!
//! Only hits and misses are modelled; there is no latency, dirty state, or
//! lower level.

/// Miss classification.
pub mod classify;

/// Cache replacement policy implementations (FIFO, LRU, Random).
pub mod policies;

/// Valid/tag storage.
pub mod store;

use tracing::{debug, trace};

use self::policies::{FifoPolicy, LruPolicy, RandomPolicy, ReplacementPolicy};
use self::store::SetAssociativeStore;
use crate::common::{AddressLayout, ConfigError};
use crate::config::{CacheConfig, ReplacementPolicy as PolicyType};
use crate::stats::CacheStats;

pub use self::classify::{MissKind, classify_miss};

/// Result of a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Block was resident in `way`.
    Hit {
        /// Way that held the block.
        way: usize,
    },
    /// Block was absent and has now been installed.
    Miss {
        /// Classification of the miss.
        kind: MissKind,
        /// Way the block was installed into.
        way: usize,
        /// Tag displaced from that way, if it was valid.
        evicted: Option<u32>,
    },
}

impl AccessOutcome {
    /// True for [`AccessOutcome::Hit`].
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Miss classification, or `None` for a hit.
    pub const fn miss_kind(&self) -> Option<MissKind> {
        match self {
            Self::Hit { .. } => None,
            Self::Miss { kind, .. } => Some(*kind),
        }
    }
}

/// Cache simulator implementing a set-associative cache with a configurable policy.
///
/// The replacement policy is chosen once at construction and boxed for dynamic
/// dispatch; its state (FIFO queues, LRU clock, RNG) lives and dies with the cache.
#[derive(Debug)]
pub struct Cache {
    config: CacheConfig,
    layout: AddressLayout,
    store: SetAssociativeStore,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl Cache {
    /// Creates a cache for a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry and replacement policy.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`CacheConfig::validate`].
    pub fn new(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sets = config.sets as usize;
        let ways = config.associativity as usize;

        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            PolicyType::Fifo => Box::new(FifoPolicy::new(sets, ways, config.fifo_scope)),
            PolicyType::Random => Box::new(RandomPolicy::new(ways, config.seed)),
            PolicyType::Lru => Box::new(LruPolicy::new(sets, ways)),
        };

        Ok(Self::with_policy(config, policy))
    }

    /// Creates a cache driven by a caller-supplied policy.
    ///
    /// `config.policy` is recorded but not consulted. The configuration is
    /// assumed valid.
    pub fn with_policy(config: CacheConfig, policy: Box<dyn ReplacementPolicy>) -> Self {
        let layout = config.layout();
        debug!(
            sets = config.sets,
            block_size = config.block_size,
            ways = config.associativity,
            policy = %config.policy,
            tag_bits = layout.tag_bits(),
            index_bits = layout.index_bits(),
            offset_bits = layout.offset_bits(),
            "cache constructed"
        );
        Self {
            store: SetAssociativeStore::new(config.sets as usize, config.associativity as usize),
            config,
            layout,
            policy,
            stats: CacheStats::default(),
        }
    }

    /// Configuration the cache was built with.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Address layout in use.
    pub const fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Read-only view of the block store.
    pub const fn store(&self) -> &SetAssociativeStore {
        &self.store
    }

    /// Number of valid slots.
    pub const fn occupied(&self) -> usize {
        self.store.occupied()
    }

    /// Total slot count.
    pub const fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// True when every slot is valid.
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Checks whether `addr`'s block is resident, without touching any state.
    pub fn contains(&self, addr: u32) -> bool {
        let parts = self.layout.decode(addr);
        self.store.find_block(parts.index, parts.tag).is_some()
    }

    /// Simulates one access to `addr`.
    ///
    /// On a miss the block is always installed; the victim is chosen by the
    /// policy only when the set has no empty way.
    pub fn access(&mut self, addr: u32) -> AccessOutcome {
        let parts = self.layout.decode(addr);
        let set = parts.index;

        if let Some(way) = self.store.find_block(set, parts.tag) {
            self.stats.record_hit();
            self.policy.on_hit(set, way);
            return AccessOutcome::Hit { way };
        }

        let kind = classify_miss(&self.store, set);
        self.stats.record_miss(kind);

        let way = match self.store.find_empty_way(set) {
            Some(way) => way,
            None => self.policy.select_victim(set),
        };
        let evicted = self.store.install(set, way, parts.tag);
        self.policy.on_fill(set, way);

        if let Some(old_tag) = evicted {
            trace!(addr, set, way, old_tag, new_tag = parts.tag, %kind, "evicted");
        }

        AccessOutcome::Miss { kind, way, evicted }
    }
}
