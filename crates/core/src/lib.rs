//! Trace-driven set-associative cache simulator library.
//!
//! This crate classifies every access of a 32-bit address trace as a hit or a
//! compulsory, capacity, or conflict miss:
//! 1. **Addressing:** Tag/index/offset decomposition of 32-bit addresses.
//! 2. **Cache:** Set-associative block store, replacement policies (Random, FIFO, LRU), and miss classification.
//! 3. **Configuration:** Validated geometry and policy selection.
//! 4. **Simulation:** Trace loading, replay, and statistics reporting.
//!
//! # Examples
//!
//! ```
//! use cachesim_core::{Cache, CacheConfig};
//! use cachesim_core::config::ReplacementPolicy;
//!
//! let config = CacheConfig::new(4, 16, 2, ReplacementPolicy::Lru).unwrap();
//! let mut cache = Cache::new(config).unwrap();
//! assert!(!cache.access(0x1000).is_hit());
//! assert!(cache.access(0x1004).is_hit());
//! assert_eq!(cache.stats().accesses, 2);
//! ```

/// Set-associative cache, replacement policies, and miss classification.
pub mod cache;
/// Common types (address layout, errors).
pub mod common;
/// Cache configuration (geometry, policy selection, validation).
pub mod config;
/// Trace loader and replay driver.
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Cache model; construct with `Cache::new`.
pub use crate::cache::{AccessOutcome, Cache, MissKind};
/// Cache configuration; use `CacheConfig::new` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Trace replay driver.
pub use crate::sim::Simulator;
/// Counters and derived rates.
pub use crate::stats::{CacheStats, OutputFormat, Report};
