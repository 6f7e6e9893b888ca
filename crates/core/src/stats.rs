//! Simulation statistics.
//!
//! A run produces exactly three counters. Every simulated record adds to them;
//! skipped records leave them unchanged. A modify counts twice: its load half
//! either hits or misses, and its store half always hits.

use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Hit, miss, and eviction totals for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Lookups that found their block resident.
    pub hits: u64,
    /// Lookups that had to install their block.
    pub misses: u64,
    /// Misses that displaced a resident block.
    pub evictions: u64,
}

impl RunResult {
    /// Creates a tally with the given counts.
    pub const fn new(hits: u64, misses: u64, evictions: u64) -> Self {
        Self {
            hits,
            misses,
            evictions,
        }
    }

    /// Total lookups performed (`hits + misses`).
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, or `0.0` for an empty run.
    pub fn hit_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Fraction of lookups that missed, or `0.0` for an empty run.
    pub fn miss_rate(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.misses as f64 / total as f64,
        }
    }

    /// Prints the one-line summary to stdout.
    pub fn print_summary(&self) {
        println!("{self}");
    }
}

impl AddAssign for RunResult {
    fn add_assign(&mut self, rhs: Self) {
        self.hits += rhs.hits;
        self.misses += rhs.misses;
        self.evictions += rhs.evictions;
    }
}

impl fmt::Display for RunResult {
    /// Formats as `hits:<h> misses:<m> evictions:<e>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}
