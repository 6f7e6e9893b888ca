//! Simulator: the cache plus the running tally.
//!
//! A run is a strict left fold over the trace. Each record is looked up in
//! the cache in order, the cache updates its LRU state, and the outcome is
//! added to the tally. Records cannot be reordered since LRU state depends on
//! access order.

use std::fmt;

use tracing::{info, trace};

use crate::cache::{CacheSim, Lookup};
use crate::common::data::{AccessKind, AccessRecord};
use crate::common::error::ConfigError;
use crate::config::CacheConfig;
use crate::stats::RunResult;

/// What one simulated record did to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The record that was simulated.
    pub record: AccessRecord,
    /// Result of the (first) lookup. For a modify this is the load half;
    /// the store half always hits.
    pub lookup: Lookup,
}

impl AccessOutcome {
    /// Contribution of this outcome to the run tally.
    ///
    /// | kind         | hit           | miss                            |
    /// |--------------|---------------|---------------------------------|
    /// | Load / Store | 1 hit         | 1 miss (+1 eviction if full)    |
    /// | Modify       | 2 hits        | 1 miss, 1 hit (+1 eviction)     |
    pub const fn tally(&self) -> RunResult {
        let store_half = matches!(self.record.kind, AccessKind::Modify) as u64;
        match self.lookup {
            Lookup::Hit => RunResult::new(1 + store_half, 0, 0),
            Lookup::Miss { evicted } => {
                RunResult::new(store_half, 1, evicted.is_some() as u64)
            }
        }
    }
}

impl fmt::Display for AccessOutcome {
    /// Verbose trace form, e.g. `L 10,1 miss eviction` or `M 20,1 hit hit`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record)?;
        match self.lookup {
            Lookup::Hit => write!(f, " hit")?,
            Lookup::Miss { evicted: None } => write!(f, " miss")?,
            Lookup::Miss { evicted: Some(_) } => write!(f, " miss eviction")?,
        }
        if self.record.kind == AccessKind::Modify {
            write!(f, " hit")?;
        }
        Ok(())
    }
}

/// Drives one cache over a sequence of records and accumulates the tally.
#[derive(Debug, Clone)]
pub struct Simulator {
    cache: CacheSim,
    result: RunResult,
    skipped: u64,
}

impl Simulator {
    /// Creates a simulator with an empty cache and a zeroed tally.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` violates the geometry invariants.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let cache = CacheSim::new(config)?;
        info!(
            s = config.set_index_bits,
            e = config.associativity,
            b = config.block_offset_bits,
            sets = config.num_sets(),
            block_size = config.block_size(),
            "cache initialized"
        );
        Ok(Self {
            cache,
            result: RunResult::default(),
            skipped: 0,
        })
    }

    /// Simulates one record.
    ///
    /// # Returns
    ///
    /// The outcome, or `None` if the record's kind is not simulated
    /// (the tally and cache are left untouched).
    pub fn step(&mut self, record: &AccessRecord) -> Option<AccessOutcome> {
        if !record.kind.is_simulated() {
            self.skipped += 1;
            trace!(op = %record.kind.op(), "skipping unsimulated access");
            return None;
        }

        let outcome = AccessOutcome {
            record: *record,
            lookup: self.cache.access(record.address),
        };
        self.result += outcome.tally();
        trace!(%outcome, "access");
        Some(outcome)
    }

    /// Simulates every record in order, calling `observe` for each simulated one.
    pub fn run_with<'a, I, F>(&mut self, records: I, mut observe: F)
    where
        I: IntoIterator<Item = &'a AccessRecord>,
        F: FnMut(&AccessOutcome),
    {
        for record in records {
            if let Some(outcome) = self.step(record) {
                observe(&outcome);
            }
        }
    }

    /// Simulates every record in order.
    pub fn run<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a AccessRecord>,
    {
        self.run_with(records, |_| {});
    }

    /// Tally so far.
    pub const fn result(&self) -> RunResult {
        self.result
    }

    /// Number of records skipped because their kind is not simulated.
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// The cache being driven.
    pub const fn cache(&self) -> &CacheSim {
        &self.cache
    }

    /// Ends the run, releasing the cache and returning the final tally.
    pub fn finish(self) -> RunResult {
        info!(
            hits = self.result.hits,
            misses = self.result.misses,
            evictions = self.result.evictions,
            skipped = self.skipped,
            "run complete"
        );
        self.result
    }
}
