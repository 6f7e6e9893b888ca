//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the building blocks shared by the cache and the
//! simulation driver. It includes:
//! 1. **Bit Fields:** Inclusive bit-range extraction from 64-bit values.
//! 2. **Address Fields:** Decomposition of an address into tag, set index, and block offset.
//! 3. **Memory Access:** Access kinds and decoded trace records.
//! 4. **Error Handling:** Configuration, trace, and top-level simulation errors.

/// Address decomposition into tag / set index / block offset.
pub mod addr;

/// Inclusive bit-range extraction.
pub mod bits;

/// Memory access kinds and decoded trace records.
pub mod data;

/// Error types.
pub mod error;

pub use addr::AddrFields;
pub use bits::get_bits;
pub use data::{AccessKind, AccessRecord};
pub use error::{ConfigError, SimError, TraceError};
