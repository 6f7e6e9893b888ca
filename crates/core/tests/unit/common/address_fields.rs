//! # Address Decomposition Tests
//!
//! The tag, set index, and offset must partition a 64-bit address exactly:
//! no overlap, no gap, and reassembly must reproduce the address.

use csim_core::common::AddrFields;
use csim_core::config::CacheConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Generates a valid `(s, b)` pair with `s + b <= 63`.
fn geometry() -> impl Strategy<Value = CacheConfig> {
    (0u32..=63)
        .prop_flat_map(|s| (Just(s), 0u32..=(63 - s), 1usize..=8))
        .prop_map(|(s, b, e)| CacheConfig::new(s, e, b))
}

#[test]
fn test_decompose_example() {
    // s = 4, b = 4: offset = bits 0..3, set = bits 4..7, tag = bits 8..63.
    let config = CacheConfig::new(4, 1, 4);
    let fields = AddrFields::decompose(0x0000_7FF0_0039_8ABC, &config);
    assert_eq!(
        fields,
        AddrFields {
            tag: 0x0000_7FF0_0039_8A,
            set_index: 0xB,
            offset: 0xC,
        }
    );
}

#[test]
fn test_zero_width_fields_are_zero() {
    let config = CacheConfig::new(0, 1, 0);
    let fields = AddrFields::decompose(0xDEAD_BEEF, &config);
    assert_eq!(fields.set_index, 0);
    assert_eq!(fields.offset, 0);
    assert_eq!(fields.tag, 0xDEAD_BEEF);
}

#[test]
fn test_single_tag_bit_at_maximum_geometry() {
    // s + b = 63 leaves bit 63 alone as the tag.
    let config = CacheConfig::new(31, 1, 32);
    let fields = AddrFields::decompose(u64::MAX, &config);
    assert_eq!(fields.tag, 1);
    assert_eq!(fields.set_index, (1 << 31) - 1);
    assert_eq!(fields.offset, u32::MAX as u64);
}

#[test]
fn test_block_base_clears_offset() {
    let config = CacheConfig::new(2, 1, 4);
    let fields = AddrFields::decompose(0x1234, &config);
    assert_eq!(fields.block_base(&config), 0x1230);
}

proptest! {
    #[test]
    fn prop_fields_reassemble_address(config in geometry(), addr in any::<u64>()) {
        let fields = AddrFields::decompose(addr, &config);
        prop_assert_eq!(fields.compose(&config), addr);
    }

    #[test]
    fn prop_fields_do_not_overlap(config in geometry(), addr in any::<u64>()) {
        let s = config.set_index_bits;
        let b = config.block_offset_bits;
        let fields = AddrFields::decompose(addr, &config);

        let offset_part = fields.offset;
        let set_part = fields.set_index << b;
        let tag_part = fields.tag << (s + b);
        prop_assert_eq!(offset_part & set_part, 0);
        prop_assert_eq!(offset_part & tag_part, 0);
        prop_assert_eq!(set_part & tag_part, 0);
    }

    #[test]
    fn prop_fields_fit_their_widths(config in geometry(), addr in any::<u64>()) {
        let fields = AddrFields::decompose(addr, &config);
        prop_assert!(u128::from(fields.offset) < (1u128 << config.block_offset_bits));
        prop_assert!(u128::from(fields.set_index) < (1u128 << config.set_index_bits));
        prop_assert!(u128::from(fields.tag) < (1u128 << config.tag_bits()));
    }
}
