//! Common types shared across the simulator.
//!
//! This module provides:
//! 1. **Address Types:** The 32-bit address layout and its tag/index/offset decomposition.
//! 2. **Error Handling:** Configuration and trace error taxonomies.

/// Address layout and decoding.
pub mod addr;

/// Error types.
pub mod error;

pub use addr::{ADDR_BITS, AddressLayout, DecodedAddr};
pub use error::{ConfigError, SimError, TraceError};
