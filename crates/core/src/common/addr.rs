//! Address decomposition.
//!
//! Splits a 64-bit byte address into the three fields a set-associative cache
//! indexes by. For `b` block-offset bits and `s` set-index bits:
//!
//! ```text
//!  63            b+s  b+s-1      b  b-1       0
//! +-----------------+-------------+-----------+
//! |       tag       |  set index  |  offset   |
//! +-----------------+-------------+-----------+
//! ```
//!
//! The fields partition the address exactly; a zero-width field is 0.

use super::bits::{MSB, get_bits};
use crate::config::CacheConfig;

/// The tag, set index, and block offset of one address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddrFields {
    /// Bits `b+s..=63`.
    pub tag: u64,
    /// Bits `b..b+s`.
    pub set_index: u64,
    /// Bits `0..b`. Not used for lookup; whole blocks are cached.
    pub offset: u64,
}

/// Extracts the `width`-bit field starting at `low`, treating zero width as an empty field.
#[inline]
const fn field(addr: u64, low: u32, width: u32) -> u64 {
    if width == 0 {
        0
    } else {
        get_bits(addr, low, low + width - 1)
    }
}

impl AddrFields {
    /// Splits `addr` according to the geometry in `config`.
    ///
    /// `config` is expected to be valid (`s + b <= 63`), which guarantees a
    /// tag field of at least one bit.
    ///
    /// # Arguments
    ///
    /// * `addr` - The byte address of the access.
    /// * `config` - Cache geometry providing `s` and `b`.
    #[inline]
    pub const fn decompose(addr: u64, config: &CacheConfig) -> Self {
        let b = config.block_offset_bits;
        let s = config.set_index_bits;
        Self {
            tag: get_bits(addr, b + s, MSB),
            set_index: field(addr, b, s),
            offset: field(addr, 0, b),
        }
    }

    /// Reassembles the address these fields were taken from.
    ///
    /// Inverse of [`AddrFields::decompose`] for the same `config`.
    #[inline]
    pub const fn compose(&self, config: &CacheConfig) -> u64 {
        let b = config.block_offset_bits;
        let s = config.set_index_bits;
        (self.tag << (b + s)) | (self.set_index << b) | self.offset
    }

    /// Returns the address of the first byte of the containing block.
    #[inline]
    pub const fn block_base(&self, config: &CacheConfig) -> u64 {
        self.compose(config) & !self.offset
    }
}
