//! Simulation driver and trace input.
//!
//! Provides the trace reader that turns text into access records and the
//! simulator that folds those records into a [`RunResult`].

/// Simulator and per-access outcomes.
pub mod simulator;
/// Trace decoding.
pub mod trace;

use std::path::Path;

pub use simulator::{AccessOutcome, Simulator};

use crate::common::data::AccessRecord;
use crate::common::error::{ConfigError, SimError};
use crate::config::CacheConfig;
use crate::stats::RunResult;

/// Runs a complete simulation over in-memory records.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `config` is invalid; nothing is simulated.
pub fn simulate<'a, I>(config: &CacheConfig, records: I) -> Result<RunResult, ConfigError>
where
    I: IntoIterator<Item = &'a AccessRecord>,
{
    let mut sim = Simulator::new(config)?;
    sim.run(records);
    Ok(sim.finish())
}

/// Validates `config`, reads the trace at `path`, and runs it.
///
/// The geometry is checked before the trace is opened.
///
/// # Errors
///
/// [`SimError::Config`] for an invalid geometry, [`SimError::Trace`] if the
/// trace cannot be read.
pub fn simulate_file(config: &CacheConfig, path: impl AsRef<Path>) -> Result<RunResult, SimError> {
    let mut sim = Simulator::new(config)?;
    let records = trace::read_trace(path)?;
    sim.run(&records);
    Ok(sim.finish())
}
