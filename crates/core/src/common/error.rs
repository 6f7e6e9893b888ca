//! Error definitions.
//!
//! This module defines the error types surfaced by the simulator. It provides:
//! 1. **Configuration Errors:** Geometry that violates the cache invariants, rejected before a run.
//! 2. **Trace Errors:** I/O failures while reading a trace file.
//! 3. **Simulation Errors:** A top-level union returned by the one-call entry points.
//!
//! Malformed trace lines and unknown operations are not errors; they decode to
//! records the simulator skips.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Cache geometry that cannot be simulated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Set-index and block-offset fields leave no room for a tag in a 64-bit address.
    #[error(
        "set index bits ({set_index_bits}) + block offset bits ({block_offset_bits}) must not exceed 63"
    )]
    AddressBitsExhausted {
        /// Requested set-index bits (`s`).
        set_index_bits: u32,
        /// Requested block-offset bits (`b`).
        block_offset_bits: u32,
    },

    /// Associativity of zero ways.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,
}

/// Failure to read a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be opened.
    #[error("could not open trace file '{}': {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading a line of the trace failed partway through.
    #[error("could not read line {line} of trace file '{}': {source}", .path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Any error that stops a simulation from starting or completing.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache geometry.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unreadable trace.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
