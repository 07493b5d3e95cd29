//! Error definitions.
//!
//! Failures fall into two families, both fatal and both detected before the
//! first address is simulated:
//! 1. **Configuration errors:** bad geometry or an unknown policy code.
//! 2. **Trace errors:** the trace source is missing, unreadable, or empty.
//!
//! The replay loop itself has no failure path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache geometry or policy selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A size parameter was zero.
    #[error("{field} must be a positive integer")]
    Zero {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// Set count or block size is not a power of two.
    #[error("{field} must be a power of two (got {value})")]
    NotPowerOfTwo {
        /// Name of the offending parameter.
        field: &'static str,
        /// Value supplied.
        value: u64,
    },

    /// Replacement policy code is not one of `R`, `F`, `L`.
    #[error("replacement policy must be R, F or L (got {0:?})")]
    UnknownPolicy(String),

    /// Index and offset fields together exceed the 32-bit address.
    #[error(
        "sets x block size spans {index_bits} + {offset_bits} address bits, more than a 32-bit address holds"
    )]
    AddressTooNarrow {
        /// Bits required by the set index.
        index_bits: u32,
        /// Bits required by the block offset.
        offset_bits: u32,
    },

    /// Geometry needs more block slots than the simulator will allocate.
    #[error("cache of {slots} block slots exceeds the supported maximum of {max}")]
    TooLarge {
        /// Requested `sets * associativity`.
        slots: u64,
        /// Supported limit.
        max: u64,
    },
}

/// Failure to obtain a usable address trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The named trace does not exist.
    #[error("trace file '{}' not found", path.display())]
    NotFound {
        /// Path that was opened.
        path: PathBuf,
    },

    /// Any other read failure.
    #[error("error reading trace file '{}': {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The trace holds no complete address.
    #[error("trace file '{}' contains no addresses", path.display())]
    Empty {
        /// Path that was read.
        path: PathBuf,
    },
}

impl TraceError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Any error that prevents a simulation from starting.
#[derive(Debug, Error)]
pub enum SimError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// See [`TraceError`].
    #[error(transparent)]
    Trace(#[from] TraceError),
}
