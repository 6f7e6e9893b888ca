//! Set-Associative Cache Tag Store.
//!
//! This module implements the tag storage of a set-associative cache with LRU
//! replacement. It models only residency: there is no data, no dirty state,
//! and no timing. Each access decomposes the address, searches the addressed
//! set, and either promotes the resident tag or installs it, evicting the
//! least recently used tag when the set is full.
//!
//! Sets are materialized on first access. An untouched set is
//! indistinguishable from one whose ways are all empty, so a geometry with
//! up to `2^63` sets costs memory only for the sets a trace actually uses.

/// Per-set LRU way stack.
pub mod lru;

use std::collections::HashMap;

use tracing::debug;

pub use self::lru::{Fill, LruSet};
use crate::common::addr::AddrFields;
use crate::common::error::ConfigError;
use crate::config::CacheConfig;

/// Outcome of one cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The block was resident and is now the most recently used in its set.
    Hit,
    /// The block was not resident and has been installed.
    Miss {
        /// Base address of the block evicted to make room, if the set was full.
        evicted: Option<u64>,
    },
}

impl Lookup {
    /// Whether the lookup hit.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Whether the lookup evicted a block.
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::Miss { evicted: Some(_) })
    }
}

/// Tag store for a set-associative LRU cache.
///
/// Owns every set exclusively for the lifetime of one run.
#[derive(Debug, Clone)]
pub struct CacheSim {
    config: CacheConfig,
    sets: HashMap<u64, LruSet>,
}

impl CacheSim {
    /// Creates an empty cache with the given geometry.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache geometry (`s`, `E`, `b`).
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CacheConfig::validate`] if the
    /// geometry is invalid; no storage is allocated in that case.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            sets: HashMap::new(),
        })
    }

    /// Geometry this cache was built with.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Splits `addr` into tag, set index and offset for this cache.
    #[inline]
    pub const fn fields(&self, addr: u64) -> AddrFields {
        AddrFields::decompose(addr, &self.config)
    }

    /// Checks whether the block containing `addr` is resident, without
    /// updating recency.
    pub fn contains(&self, addr: u64) -> bool {
        let fields = self.fields(addr);
        self.sets
            .get(&fields.set_index)
            .is_some_and(|set| set.position(fields.tag).is_some())
    }

    /// Accesses the block containing `addr`.
    ///
    /// On a hit the block becomes the most recently used in its set. On a
    /// miss it is installed as the most recently used, evicting the least
    /// recently used block if the set already holds `E` blocks.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the access; only its block matters.
    ///
    /// # Returns
    ///
    /// [`Lookup::Hit`] or [`Lookup::Miss`] carrying the evicted block, if any.
    pub fn access(&mut self, addr: u64) -> Lookup {
        let fields = self.fields(addr);
        let ways = self.config.associativity;
        let set = self.sets.entry(fields.set_index).or_insert_with(|| {
            debug!(set = fields.set_index, ways, "materializing cache set");
            LruSet::new(ways)
        });

        if set.touch(fields.tag) {
            return Lookup::Hit;
        }

        let evicted = match set.fill(fields.tag) {
            Fill::Free => None,
            Fill::Evicted(victim) => Some(
                AddrFields {
                    tag: victim,
                    set_index: fields.set_index,
                    offset: 0,
                }
                .compose(&self.config),
            ),
        };
        Lookup::Miss { evicted }
    }

    /// The set at `index`, or `None` if it has never been accessed.
    pub fn set(&self, index: u64) -> Option<&LruSet> {
        self.sets.get(&index)
    }

    /// Iterates over every set that has been accessed, in no particular order.
    pub fn touched_sets(&self) -> impl Iterator<Item = (u64, &LruSet)> + '_ {
        self.sets.iter().map(|(&index, set)| (index, set))
    }

    /// Number of blocks currently resident across all sets.
    pub fn resident_blocks(&self) -> usize {
        self.sets.values().map(LruSet::len).sum()
    }

    /// Empties every set, keeping the geometry.
    pub fn clear(&mut self) {
        self.sets.clear();
    }
}
