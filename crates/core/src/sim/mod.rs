//! Simulation driver and trace loading.
//!
//! Provides utilities for loading address traces and replaying them through
//! a cache.

/// Binary trace loader.
pub mod loader;

/// Trace replay.
pub mod simulator;

pub use simulator::{Simulator, simulate_file};
