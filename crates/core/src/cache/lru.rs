//! Least Recently Used (LRU) way stack.
//!
//! Each cache set keeps its resident tags in recency order. Index 0 is the
//! most recently used way, the last occupied index the least recently used.
//! A hit moves the tag to the front; a miss pushes the new tag on the front
//! and, when the set is full, drops the tag at the back.
//!
//! Empty ways are not stored. A set with `n < E` resident tags reports ways
//! `n..E` as `None`, so an empty way can never be mistaken for tag 0.
//!
//! # Performance
//!
//! - `touch()`: O(W) search plus an O(W) rotate, W = associativity
//! - `fill()`: O(W) shift
//! - **Space:** O(resident tags); nothing is allocated for untouched ways

/// Result of installing a tag in a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// The tag went into a previously empty way.
    Free,
    /// The set was full; the LRU tag carried here was discarded.
    Evicted(u64),
}

/// Recency-ordered tags of one cache set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LruSet {
    /// Resident tags, MRU first. Never longer than `ways` and never holds duplicates.
    stack: Vec<u64>,
    ways: usize,
}

impl LruSet {
    /// Creates an empty set with `ways` slots.
    ///
    /// # Arguments
    ///
    /// * `ways` - Associativity of the cache; must be at least 1.
    ///
    /// # Panics
    ///
    /// In debug builds, if `ways` is 0. Such a set reports itself full
    /// while still empty.
    pub const fn new(ways: usize) -> Self {
        debug_assert!(ways >= 1, "an LRU set needs at least one way");
        Self {
            stack: Vec::new(),
            ways,
        }
    }

    /// Associativity of this set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Number of occupied ways.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no way is occupied.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether every way is occupied, so the next fill evicts.
    pub fn is_full(&self) -> bool {
        self.stack.len() >= self.ways
    }

    /// Tag held by way `way` in recency order, or `None` if that way is empty.
    pub fn slot(&self, way: usize) -> Option<u64> {
        self.stack.get(way).copied()
    }

    /// All `E` ways in recency order, empty ways as `None`.
    pub fn slots(&self) -> impl Iterator<Item = Option<u64>> + '_ {
        (0..self.ways).map(|way| self.slot(way))
    }

    /// Resident tags, most recently used first.
    pub fn tags(&self) -> &[u64] {
        &self.stack
    }

    /// Position of `tag` in recency order, if resident.
    pub fn position(&self, tag: u64) -> Option<usize> {
        self.stack.iter().position(|&t| t == tag)
    }

    /// Looks up `tag` and, on a hit, makes it the most recently used entry.
    ///
    /// The other entries keep their relative order.
    ///
    /// # Returns
    ///
    /// `true` on a hit, `false` if the tag is not resident (the set is unchanged).
    pub fn touch(&mut self, tag: u64) -> bool {
        match self.position(tag) {
            Some(pos) => {
                self.stack[..=pos].rotate_right(1);
                true
            }
            None => false,
        }
    }

    /// Installs `tag` as the most recently used entry.
    ///
    /// Must only be called after [`LruSet::touch`] reported a miss for `tag`;
    /// the caller is responsible for never inserting a resident tag twice.
    ///
    /// # Returns
    ///
    /// [`Fill::Evicted`] with the discarded tag if the set was full,
    /// [`Fill::Free`] otherwise.
    pub fn fill(&mut self, tag: u64) -> Fill {
        debug_assert!(self.position(tag).is_none(), "tag {tag:#x} already resident");
        let victim = if self.is_full() { self.stack.pop() } else { None };
        self.stack.insert(0, tag);
        victim.map_or(Fill::Free, Fill::Evicted)
    }
}
