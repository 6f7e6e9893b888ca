//! Cache geometry configuration.
//!
//! This module defines the single configuration structure that parameterizes
//! a simulation run. It provides:
//! 1. **Defaults:** Baseline geometry used when a field is omitted.
//! 2. **Validation:** The invariants a geometry must satisfy before any tag storage is allocated.
//! 3. **Derived sizes:** Number of sets, block size, and tag width.
//!
//! A configuration can be built in code, taken from `CacheConfig::default()`,
//! or deserialized from JSON.

use serde::{Deserialize, Serialize};

use crate::common::bits::MSB;
use crate::common::error::ConfigError;

/// Default configuration constants.
///
/// These mirror the canonical `-s 4 -E 1 -b 4` example geometry.
mod defaults {
    /// Default set-index bits (16 sets).
    pub const SET_INDEX_BITS: u32 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: usize = 1;

    /// Default block-offset bits (16-byte blocks).
    pub const BLOCK_OFFSET_BITS: u32 = 4;
}

/// Geometry of the simulated cache.
///
/// # Examples
///
/// ```
/// use csim_core::config::CacheConfig;
///
/// let json = r#"{ "set_index_bits": 2, "associativity": 4 }"#;
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.num_sets(), 4);
/// assert_eq!(config.block_offset_bits, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of set-index bits `s`; the cache has `2^s` sets.
    #[serde(default = "CacheConfig::default_set_index_bits")]
    pub set_index_bits: u32,
    /// Number of ways per set `E`.
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: usize,
    /// Number of block-offset bits `b`; blocks are `2^b` bytes.
    #[serde(default = "CacheConfig::default_block_offset_bits")]
    pub block_offset_bits: u32,
}

impl CacheConfig {
    /// Creates a configuration from `s`, `E` and `b`. Does not validate.
    pub const fn new(set_index_bits: u32, associativity: usize, block_offset_bits: u32) -> Self {
        Self {
            set_index_bits,
            associativity,
            block_offset_bits,
        }
    }

    /// Checks the geometry invariants.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ZeroAssociativity`] if `associativity` is 0.
    /// * [`ConfigError::AddressBitsExhausted`] if `s + b > 63`, which would
    ///   leave no tag bits in a 64-bit address.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.associativity == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        // An overflowing sum is also out of range.
        match self.set_index_bits.checked_add(self.block_offset_bits) {
            Some(total) if total <= MSB => Ok(()),
            _ => Err(ConfigError::AddressBitsExhausted {
                set_index_bits: self.set_index_bits,
                block_offset_bits: self.block_offset_bits,
            }),
        }
    }

    /// Number of sets, `2^s`. Only meaningful for a validated geometry.
    pub const fn num_sets(&self) -> u64 {
        1u64 << self.set_index_bits
    }

    /// Block size in bytes, `2^b`. Only meaningful for a validated geometry.
    pub const fn block_size(&self) -> u64 {
        1u64 << self.block_offset_bits
    }

    /// Width of the tag field, `64 - s - b`. Only meaningful for a validated geometry.
    pub const fn tag_bits(&self) -> u32 {
        MSB + 1 - self.set_index_bits - self.block_offset_bits
    }

    /// Total capacity in blocks (`2^s * E`), saturating at `u64::MAX`.
    pub const fn capacity_blocks(&self) -> u64 {
        self.num_sets().saturating_mul(self.associativity as u64)
    }

    fn default_set_index_bits() -> u32 {
        defaults::SET_INDEX_BITS
    }

    fn default_associativity() -> usize {
        defaults::ASSOCIATIVITY
    }

    fn default_block_offset_bits() -> u32 {
        defaults::BLOCK_OFFSET_BITS
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            set_index_bits: Self::default_set_index_bits(),
            associativity: Self::default_associativity(),
            block_offset_bits: Self::default_block_offset_bits(),
        }
    }
}
