//! Bit-field extraction.
//!
//! A single pure helper used by address decomposition. Bit 0 is the least
//! significant bit and ranges are inclusive on both ends.

/// Index of the most significant bit of a 64-bit value.
pub const MSB: u32 = 63;

/// Extracts bits `low..=high` of `source`, right-aligned.
///
/// Bits above `high` and below `low` are discarded. A degenerate range
/// (`low > high`, or either bound above 63) yields 0 rather than an error.
///
/// # Arguments
///
/// * `source` - The value to extract from.
/// * `low` - Lowest bit of the range (inclusive).
/// * `high` - Highest bit of the range (inclusive).
///
/// # Returns
///
/// The selected field shifted down so that bit `low` lands at bit 0.
#[inline]
pub const fn get_bits(source: u64, low: u32, high: u32) -> u64 {
    if low > MSB || high > MSB || low > high {
        return 0;
    }
    // high == 63 would need a 64-bit shift to build the mask.
    let mask = if high == MSB {
        u64::MAX
    } else {
        (1u64 << (high + 1)) - 1
    };
    (source & mask) >> low
}
