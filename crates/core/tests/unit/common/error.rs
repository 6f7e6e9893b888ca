//! # Error Tests
//!
//! Display text and conversions for configuration and trace errors.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use csim_core::common::{ConfigError, SimError, TraceError};

#[test]
fn test_address_bits_exhausted_display() {
    let err = ConfigError::AddressBitsExhausted {
        set_index_bits: 40,
        block_offset_bits: 30,
    };
    let msg = err.to_string();
    assert!(msg.contains("40"));
    assert!(msg.contains("30"));
    assert!(msg.contains("63"));
}

#[test]
fn test_zero_associativity_display() {
    assert_eq!(
        ConfigError::ZeroAssociativity.to_string(),
        "associativity must be at least 1"
    );
}

#[test]
fn test_trace_open_error_keeps_source() {
    let err = TraceError::Open {
        path: PathBuf::from("missing.trace"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert!(err.to_string().contains("missing.trace"));
    assert!(err.source().is_some());
}

#[test]
fn test_sim_error_from_config_is_transparent() {
    let err: SimError = ConfigError::ZeroAssociativity.into();
    assert!(matches!(err, SimError::Config(ConfigError::ZeroAssociativity)));
    assert_eq!(err.to_string(), ConfigError::ZeroAssociativity.to_string());
}
