//! # Configuration Tests
//!
//! Defaults, derived sizes, validation, and deserialization.

use csim_core::common::ConfigError;
use csim_core::config::CacheConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_cache_config_defaults() {
    let config = CacheConfig::default();
    assert_eq!(config.set_index_bits, 4);
    assert_eq!(config.associativity, 1);
    assert_eq!(config.block_offset_bits, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_derived_sizes() {
    let config = CacheConfig::new(5, 4, 6);
    assert_eq!(config.num_sets(), 32);
    assert_eq!(config.block_size(), 64);
    assert_eq!(config.tag_bits(), 53);
    assert_eq!(config.capacity_blocks(), 128);
}

#[rstest]
#[case(0, 1, 0)]
#[case(63, 1, 0)]
#[case(0, 1, 63)]
#[case(32, 8, 31)]
#[case(4, usize::MAX, 4)]
fn test_valid_geometries(#[case] s: u32, #[case] e: usize, #[case] b: u32) {
    assert_eq!(CacheConfig::new(s, e, b).validate(), Ok(()));
}

#[rstest]
#[case(32, 32)]
#[case(64, 0)]
#[case(0, 64)]
#[case(u32::MAX, 1)]
#[case(u32::MAX, u32::MAX)]
fn test_rejects_geometry_without_tag_bits(#[case] s: u32, #[case] b: u32) {
    assert_eq!(
        CacheConfig::new(s, 1, b).validate(),
        Err(ConfigError::AddressBitsExhausted {
            set_index_bits: s,
            block_offset_bits: b,
        })
    );
}

#[test]
fn test_rejects_zero_associativity() {
    assert_eq!(
        CacheConfig::new(4, 0, 4).validate(),
        Err(ConfigError::ZeroAssociativity)
    );
}

#[test]
fn test_deserialize_full() {
    let json = r#"{ "set_index_bits": 1, "associativity": 2, "block_offset_bits": 3 }"#;
    let config: CacheConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, CacheConfig::new(1, 2, 3));
}

#[test]
fn test_deserialize_fills_defaults() {
    let config: CacheConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CacheConfig::default());

    let config: CacheConfig = serde_json::from_str(r#"{ "associativity": 8 }"#).unwrap();
    assert_eq!(config, CacheConfig::new(4, 8, 4));
}

#[test]
fn test_serialize_round_trips_through_json() {
    let config = CacheConfig::new(2, 4, 5);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"set_index_bits\":2"));
    let back: CacheConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
