//! # LRU Invariant Tests
//!
//! Random access streams against small caches, checked against a reference
//! recency list after every access:
//!
//! - no set ever holds more than `E` tags,
//! - no tag appears twice in a set,
//! - a hit moves the tag to the front and keeps everyone else in order,
//! - an eviction happens exactly when a miss lands on a full set.

use csim_core::cache::{CacheSim, Fill, Lookup, LruSet};
use csim_core::config::CacheConfig;
use proptest::prelude::*;

fn assert_set_invariants(set: &LruSet) -> Result<(), TestCaseError> {
    prop_assert!(set.len() <= set.ways());
    let mut seen = set.tags().to_vec();
    seen.sort_unstable();
    seen.dedup();
    prop_assert_eq!(seen.len(), set.len(), "duplicate tag in set");
    Ok(())
}

proptest! {
    #[test]
    fn prop_set_matches_reference_model(
        ways in 1usize..=6,
        tags in prop::collection::vec(0u64..10, 0..200),
    ) {
        let mut set = LruSet::new(ways);
        let mut model: Vec<u64> = Vec::new();

        for tag in tags {
            let was_full = set.is_full();
            let hit = set.touch(tag);
            prop_assert_eq!(hit, model.contains(&tag));
            if hit {
                model.retain(|&t| t != tag);
                model.insert(0, tag);
            } else {
                let fill = set.fill(tag);
                let expected_victim = if model.len() == ways { model.pop() } else { None };
                prop_assert_eq!(was_full, expected_victim.is_some());
                prop_assert_eq!(fill, expected_victim.map_or(Fill::Free, Fill::Evicted));
                model.insert(0, tag);
            }
            prop_assert_eq!(set.tags(), model.as_slice());
            assert_set_invariants(&set)?;
        }
    }

    #[test]
    fn prop_cache_sets_respect_capacity(
        s in 0u32..=3,
        ways in 1usize..=4,
        b in 0u32..=4,
        addrs in prop::collection::vec(0u64..1024, 1..300),
    ) {
        let mut cache = CacheSim::new(&CacheConfig::new(s, ways, b)).unwrap();
        for addr in addrs {
            let fields = cache.fields(addr);
            let before = cache.set(fields.set_index).map_or(0, LruSet::len);
            let resident = cache.contains(addr);

            let lookup = cache.access(addr);
            prop_assert_eq!(lookup.is_hit(), resident);
            if let Lookup::Miss { evicted } = lookup {
                prop_assert_eq!(evicted.is_some(), before == ways);
            }

            let set = cache.set(fields.set_index).unwrap();
            prop_assert_eq!(set.slot(0), Some(fields.tag));
            assert_set_invariants(set)?;
        }
    }
}
