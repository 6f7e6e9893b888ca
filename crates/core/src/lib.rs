//! Trace-driven cache simulator library.
//!
//! This crate models a single set-associative cache with LRU replacement and
//! replays a memory-access trace against it. It provides:
//! 1. **Common:** Bit-field extraction, address decomposition, access kinds, and error types.
//! 2. **Configuration:** Cache geometry (set-index bits, associativity, block-offset bits) and validation.
//! 3. **Cache:** Per-set LRU way stacks and the tag store that owns them.
//! 4. **Simulation:** Trace reader and the sequential fold that produces a run tally.
//! 5. **Statistics:** Hit, miss, and eviction counters for reporting.

/// Common types (bit fields, address fields, access kinds, errors).
pub mod common;
/// Cache geometry configuration (defaults, validation, derived sizes).
pub mod config;
/// Set-associative tag store with LRU replacement.
pub mod cache;
/// Trace reader and simulation driver.
pub mod sim;
/// Run statistics (hits, misses, evictions).
pub mod stats;

/// Cache geometry; construct directly or use `CacheConfig::default()`.
pub use crate::config::CacheConfig;
/// Tag store; normally driven through [`Simulator`].
pub use crate::cache::CacheSim;
/// Simulation driver; feed it [`AccessRecord`](crate::common::AccessRecord)s with `step` or `run`.
pub use crate::sim::Simulator;
/// Final tally returned by a run.
pub use crate::stats::RunResult;
