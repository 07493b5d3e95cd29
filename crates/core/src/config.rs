//! Cache configuration.
//!
//! This module defines the immutable parameters of a simulated cache. It provides:
//! 1. **Defaults:** Baseline geometry used when a field is omitted.
//! 2. **Structures:** `CacheConfig`, fixed for the lifetime of a `Cache`.
//! 3. **Enums:** Replacement policy selector and FIFO queue scope.
//! 4. **Validation:** Eager geometry checks returning `ConfigError`.
//!
//! Configuration is built from command-line arguments or deserialized from JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{ADDR_BITS, AddressLayout, ConfigError};

/// Default configuration constants.
mod defaults {
    /// Default number of sets.
    pub const SETS: u32 = 256;

    /// Default block size in bytes.
    pub const BLOCK_SIZE: u32 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: u32 = 1;
}

/// Largest supported number of block slots (`sets * associativity`).
pub const MAX_SLOTS: u64 = 1 << 24;

/// Cache replacement policy algorithms.
///
/// Selects which valid way to evict when a miss lands in a full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReplacementPolicy {
    /// Uniformly random way.
    #[serde(alias = "RANDOM", alias = "R")]
    Random,
    /// Oldest fill is evicted first, regardless of later hits.
    #[serde(alias = "FIFO", alias = "F")]
    Fifo,
    /// Least recently hit or filled way is evicted.
    #[default]
    #[serde(alias = "LRU", alias = "L")]
    Lru,
}

impl ReplacementPolicy {
    /// Single-letter command-line code.
    pub const fn code(self) -> char {
        match self {
            Self::Random => 'R',
            Self::Fifo => 'F',
            Self::Lru => 'L',
        }
    }

    /// Parses the case-sensitive command-line code `R`, `F` or `L`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPolicy`] for any other string.
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        match code {
            "R" => Ok(Self::Random),
            "F" => Ok(Self::Fifo),
            "L" => Ok(Self::Lru),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Accepts the single-letter code or the policy name in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).or_else(|_| match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        })
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "Random",
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
        };
        f.write_str(name)
    }
}

/// Scope of the FIFO insertion queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FifoScope {
    /// One queue per set. The first block filled into a set is the first evicted from it.
    #[default]
    PerSet,
    /// A single queue of way indices shared by every set.
    ///
    /// Only behaves as true FIFO for direct-mapped or single-set caches; kept
    /// to reproduce results from tools that pool insertion order globally.
    CacheWide,
}

/// Parameters of a simulated cache.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy};
///
/// let config = CacheConfig::new(256, 4, 1, ReplacementPolicy::Random).unwrap();
/// let layout = config.layout();
/// assert_eq!(layout.offset_bits(), 2);
/// assert_eq!(layout.index_bits(), 8);
/// assert_eq!(layout.tag_bits(), 22);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use cachesim_core::config::{CacheConfig, FifoScope, ReplacementPolicy};
///
/// let json = r#"{ "sets": 16, "block_size": 32, "associativity": 4, "policy": "Fifo" }"#;
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.policy, ReplacementPolicy::Fifo);
/// assert_eq!(config.fifo_scope, FifoScope::PerSet);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of sets (power of two).
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: u32,
    /// Block size in bytes (power of two).
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u32,
    /// Ways per set.
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u32,
    /// Victim selection algorithm.
    #[serde(default)]
    pub policy: ReplacementPolicy,
    /// FIFO queue scope; ignored by the other policies.
    #[serde(default)]
    pub fifo_scope: FifoScope,
    /// Seed for the random policy. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CacheConfig {
    const fn default_sets() -> u32 {
        defaults::SETS
    }

    const fn default_block_size() -> u32 {
        defaults::BLOCK_SIZE
    }

    const fn default_associativity() -> u32 {
        defaults::ASSOCIATIVITY
    }

    /// Builds and validates a configuration with per-set FIFO and no seed.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, see [`CacheConfig::validate`].
    pub fn new(
        sets: u32,
        block_size: u32,
        associativity: u32,
        policy: ReplacementPolicy,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            sets,
            block_size,
            associativity,
            policy,
            fifo_scope: FifoScope::default(),
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the random policy seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the FIFO queue scope.
    #[must_use]
    pub const fn with_fifo_scope(mut self, scope: FifoScope) -> Self {
        self.fifo_scope = scope;
        self
    }

    /// Checks every geometry rule.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Zero`] if sets, block size or associativity is zero.
    /// - [`ConfigError::NotPowerOfTwo`] if sets or block size is not a power of two.
    /// - [`ConfigError::AddressTooNarrow`] if index and offset need more than 32 bits.
    /// - [`ConfigError::TooLarge`] if the cache would hold more than [`MAX_SLOTS`] blocks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sets == 0 {
            return Err(ConfigError::Zero {
                field: "number of sets",
            });
        }
        if self.block_size == 0 {
            return Err(ConfigError::Zero {
                field: "block size",
            });
        }
        if self.associativity == 0 {
            return Err(ConfigError::Zero {
                field: "associativity",
            });
        }
        if !self.sets.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "number of sets",
                value: u64::from(self.sets),
            });
        }
        if !self.block_size.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "block size",
                value: u64::from(self.block_size),
            });
        }
        let index_bits = self.sets.trailing_zeros();
        let offset_bits = self.block_size.trailing_zeros();
        if index_bits + offset_bits > ADDR_BITS {
            return Err(ConfigError::AddressTooNarrow {
                index_bits,
                offset_bits,
            });
        }
        let slots = u64::from(self.sets) * u64::from(self.associativity);
        if slots > MAX_SLOTS {
            return Err(ConfigError::TooLarge {
                slots,
                max: MAX_SLOTS,
            });
        }
        Ok(())
    }

    /// Address layout implied by the set count and block size.
    pub const fn layout(&self) -> AddressLayout {
        AddressLayout::for_geometry(self.sets, self.block_size)
    }

    /// Total number of block slots (`sets * associativity`).
    pub const fn capacity(&self) -> usize {
        self.sets as usize * self.associativity as usize
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            block_size: defaults::BLOCK_SIZE,
            associativity: defaults::ASSOCIATIVITY,
            policy: ReplacementPolicy::default(),
            fifo_scope: FifoScope::default(),
            seed: None,
        }
    }
}
