//! Trace Loader.
//!
//! This module reads address traces from disk. It performs:
//! 1. **File loading:** Reads the whole trace into memory before simulation starts.
//! 2. **Decoding:** Splits the bytes into big-endian 32-bit addresses with no header or separators.
//! 3. **Validation:** Rejects missing, unreadable, or empty traces.
//!
//! A trailing fragment shorter than four bytes is ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::TraceError;

/// Size of one encoded address in bytes.
pub const ADDR_BYTES: usize = 4;

/// Decodes a raw trace buffer into addresses.
///
/// # Arguments
///
/// * `bytes` - Concatenated big-endian 32-bit addresses.
///
/// # Returns
///
/// The addresses in trace order; any trailing partial word is dropped.
pub fn parse_trace(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(ADDR_BYTES)
        .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
        .collect()
}

/// Loads the address trace stored at `path`.
///
/// # Arguments
///
/// * `path` - Path to the binary trace file.
///
/// # Errors
///
/// - [`TraceError::NotFound`] if the file does not exist.
/// - [`TraceError::Io`] on any other read failure.
/// - [`TraceError::Empty`] if the file holds no complete address.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<u32>, TraceError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| TraceError::from_io(path, e))?;
    let addrs = parse_trace(&bytes);

    debug!(
        path = %path.display(),
        addresses = addrs.len(),
        ignored_bytes = bytes.len() % ADDR_BYTES,
        "trace loaded"
    );

    if addrs.is_empty() {
        return Err(TraceError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(addrs)
}
