//! Address decomposition.
//!
//! Splits a 32-bit trace address into tag, set index, and block offset. It provides:
//! 1. **Layout:** `AddressLayout` derives the bit widths from set count and block size.
//! 2. **Decoding:** `AddressLayout::decode` produces a `DecodedAddr`.
//! 3. **Reconstruction:** `AddressLayout::compose` inverts `decode` exactly.
//!
//! Zero-width fields are legal: a single-set cache has no index bits and a
//! one-byte block has no offset bits, in which case the field is always 0.

/// Width of a trace address in bits.
pub const ADDR_BITS: u32 = 32;

/// Returns a mask covering the low `bits` bits, saturating at the full word.
#[inline(always)]
const fn low_mask(bits: u32) -> u32 {
    if bits >= ADDR_BITS { u32::MAX } else { (1 << bits) - 1 }
}

/// Right shift that yields 0 once the whole word is shifted out.
#[inline(always)]
const fn shr(value: u32, bits: u32) -> u32 {
    if bits >= ADDR_BITS { 0 } else { value >> bits }
}

/// Left shift that yields 0 once the whole word is shifted out.
#[inline(always)]
const fn shl(value: u32, bits: u32) -> u32 {
    if bits >= ADDR_BITS { 0 } else { value << bits }
}

/// Bit widths of the tag, index, and offset fields of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    offset_bits: u32,
    index_bits: u32,
}

/// An address split into its cache-relevant fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddr {
    /// High-order bits identifying the block within its set.
    pub tag: u32,
    /// Set selector.
    pub index: usize,
    /// Byte offset within the block. Computed but never used for lookup.
    pub offset: u32,
}

impl AddressLayout {
    /// Creates a layout from raw bit widths.
    ///
    /// Callers are expected to have validated `offset_bits + index_bits <= 32`;
    /// [`CacheConfig::layout`](crate::config::CacheConfig::layout) does so.
    pub const fn new(offset_bits: u32, index_bits: u32) -> Self {
        Self {
            offset_bits,
            index_bits,
        }
    }

    /// Derives the layout for a power-of-two set count and block size.
    pub const fn for_geometry(sets: u32, block_size: u32) -> Self {
        Self::new(block_size.trailing_zeros(), sets.trailing_zeros())
    }

    /// Number of offset bits (`log2(block_size)`).
    #[inline(always)]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of index bits (`log2(sets)`).
    #[inline(always)]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Number of tag bits; whatever remains of the 32-bit address.
    #[inline(always)]
    pub const fn tag_bits(&self) -> u32 {
        ADDR_BITS - self.offset_bits - self.index_bits
    }

    /// Splits `addr` into tag, index, and offset.
    #[inline]
    pub const fn decode(&self, addr: u32) -> DecodedAddr {
        let offset = addr & low_mask(self.offset_bits);
        let index = shr(addr, self.offset_bits) & low_mask(self.index_bits);
        let tag = shr(addr, self.offset_bits + self.index_bits);
        DecodedAddr {
            tag,
            index: index as usize,
            offset,
        }
    }

    /// Rebuilds the address that `decode` split apart.
    pub const fn compose(&self, parts: DecodedAddr) -> u32 {
        let tag = shl(parts.tag, self.offset_bits + self.index_bits);
        let index = shl(parts.index as u32, self.offset_bits);
        tag | index | parts.offset
    }
}
