//! Simulator: replays a fully materialized trace through one cache.
//!
//! Accesses are applied strictly in trace order on a single thread; hit
//! behaviour depends on that order, so the trace is handed over as an
//! immutable slice before replay starts.

use std::path::Path;

use tracing::info;

use super::loader;
use crate::cache::Cache;
use crate::common::SimError;
use crate::config::CacheConfig;
use crate::stats::{CacheStats, Report};

/// Top-level simulator: owns the cache under test.
#[derive(Debug)]
pub struct Simulator {
    /// Cache state and running statistics.
    pub cache: Cache,
}

impl Simulator {
    /// Creates a simulator around a freshly built cache.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid.
    pub fn new(config: CacheConfig) -> Result<Self, SimError> {
        Ok(Self {
            cache: Cache::new(config)?,
        })
    }

    /// Wraps an existing cache, e.g. one built with a custom policy.
    pub const fn from_cache(cache: Cache) -> Self {
        Self { cache }
    }

    /// Replays every address in `trace`, in order.
    pub fn run(&mut self, trace: &[u32]) -> &CacheStats {
        for &addr in trace {
            let _ = self.cache.access(addr);
        }
        let stats = self.cache.stats();
        info!(
            accesses = stats.accesses,
            hits = stats.hits,
            compulsory = stats.compulsory_misses,
            capacity = stats.capacity_misses,
            conflict = stats.conflict_misses,
            "trace replayed"
        );
        stats
    }

    /// Final rate report for everything replayed so far.
    pub fn report(&self) -> Report {
        self.cache.stats().report()
    }
}

/// Validates `config`, loads the trace at `path`, and replays it.
///
/// Configuration is checked before the trace is read, so a bad geometry is
/// reported even when the trace is also missing.
///
/// # Errors
///
/// Returns the configuration or trace error that prevented the run.
pub fn simulate_file(config: CacheConfig, path: impl AsRef<Path>) -> Result<Report, SimError> {
    let mut sim = Simulator::new(config)?;
    let trace = loader::load_trace(path)?;
    let _ = sim.run(&trace);
    Ok(sim.report())
}
