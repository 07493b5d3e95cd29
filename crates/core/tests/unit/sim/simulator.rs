//! # Simulator Tests
//!
//! Replay of in-memory traces and the file-level `simulate_file` entry point.

use cachesim_core::common::{ConfigError, SimError, TraceError};
use cachesim_core::config::{CacheConfig, ReplacementPolicy};
use cachesim_core::sim::{Simulator, simulate_file};
use cachesim_core::stats::OutputFormat;

use crate::common::{config, encode_trace, init_logging, temp_trace};

#[test]
fn run_counts_every_access() {
    init_logging();
    let mut sim = Simulator::new(config(4, 16, 1, ReplacementPolicy::Lru)).unwrap();
    let trace = [0x00, 0x40, 0x00, 0x40, 0x44];
    let stats = *sim.run(&trace);
    assert_eq!(stats.accesses, 5);
    // 0x00 and 0x40 share set 0 and keep evicting each other; 0x44 hits the resident 0x40 block.
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.compulsory_misses, 1);
    assert_eq!(stats.conflict_misses, 3);
}

#[test]
fn run_on_empty_slice_reports_zeros() {
    let mut sim = Simulator::new(CacheConfig::default()).unwrap();
    let _ = sim.run(&[]);
    let report = sim.report();
    assert_eq!(report.accesses, 0);
    assert_eq!(report.render(OutputFormat::Compact), "0 0.0000 0.0000 0.0000 0.0000 0.0000");
}

#[test]
fn runs_accumulate() {
    let mut sim = Simulator::new(config(1, 4, 2, ReplacementPolicy::Fifo)).unwrap();
    let _ = sim.run(&[0x10]);
    let stats = *sim.run(&[0x10, 0x20]);
    assert_eq!(stats.accesses, 3);
    assert_eq!(stats.hits, 1);
}

#[test]
fn invalid_config_is_rejected() {
    let bad = CacheConfig {
        sets: 3,
        ..CacheConfig::default()
    };
    assert!(matches!(
        Simulator::new(bad),
        Err(SimError::Config(ConfigError::NotPowerOfTwo { value: 3, .. }))
    ));
}

#[test]
fn simulate_file_end_to_end() {
    // 256 sets of 4-byte blocks, direct-mapped: 0x000 and 0x400 collide in set 0.
    let trace = [0x000, 0x004, 0x000, 0x400, 0x000, 0x004];
    let file = temp_trace(&encode_trace(&trace));
    let config = CacheConfig::new(256, 4, 1, ReplacementPolicy::Lru).unwrap();

    let report = simulate_file(config, file.path()).unwrap();
    let c = report.counters;
    assert_eq!(c.accesses, 6);
    assert_eq!(c.hits, 2);
    assert_eq!(c.compulsory_misses, 2);
    assert_eq!(c.conflict_misses, 2);
    assert_eq!(c.capacity_misses, 0);
    assert_eq!(
        report.render(OutputFormat::Compact),
        "6 0.3333 0.6667 0.5000 0.0000 0.5000"
    );
}

#[test]
fn simulate_file_rejects_empty_trace() {
    let file = temp_trace(&[]);
    let err = simulate_file(CacheConfig::default(), file.path()).unwrap_err();
    assert!(matches!(err, SimError::Trace(TraceError::Empty { .. })));
}

#[test]
fn config_is_checked_before_trace() {
    let bad = CacheConfig {
        block_size: 0,
        ..CacheConfig::default()
    };
    let err = simulate_file(bad, "/definitely/not/here.bin").unwrap_err();
    assert!(matches!(err, SimError::Config(ConfigError::Zero { .. })));
}

#[test]
fn oversized_cache_is_rejected_without_allocating() {
    let huge = CacheConfig {
        sets: 65536,
        associativity: 65536,
        ..CacheConfig::default()
    };
    assert!(matches!(
        Simulator::new(huge),
        Err(SimError::Config(ConfigError::TooLarge { .. }))
    ));
}
