//! Memory Access Types.
//!
//! This module defines the decoded form of one trace event. These types are used for:
//! 1. **Trace Decoding:** Mapping the operation character of a trace line to an access kind.
//! 2. **Simulation:** Deciding how many cache lookups an event performs (a modify performs two).
//! 3. **Reporting:** Echoing the event back in verbose output.

use std::fmt;

/// Kind of memory access recorded in a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Data load (`L`).
    Load,

    /// Data store (`S`).
    Store,

    /// Data modify (`M`): a load immediately followed by a store to the same block.
    Modify,

    /// Any other operation character, such as valgrind's `I` instruction fetch.
    ///
    /// Records of this kind are skipped by the simulator.
    Unknown(char),
}

impl AccessKind {
    /// Maps a trace operation character to an access kind.
    pub const fn from_op(op: char) -> Self {
        match op {
            'L' => Self::Load,
            'S' => Self::Store,
            'M' => Self::Modify,
            other => Self::Unknown(other),
        }
    }

    /// Returns the trace operation character for this kind.
    pub const fn op(self) -> char {
        match self {
            Self::Load => 'L',
            Self::Store => 'S',
            Self::Modify => 'M',
            Self::Unknown(c) => c,
        }
    }

    /// Whether the simulator processes records of this kind.
    pub const fn is_simulated(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// One decoded trace event.
///
/// `size` is carried for reporting only; the simulation works at block
/// granularity and never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessRecord {
    /// Operation performed.
    pub kind: AccessKind,
    /// Byte address of the access.
    pub address: u64,
    /// Number of bytes accessed.
    pub size: u32,
}

impl AccessRecord {
    /// Creates a record.
    pub const fn new(kind: AccessKind, address: u64, size: u32) -> Self {
        Self {
            kind,
            address,
            size,
        }
    }

    /// Shorthand for a load record.
    pub const fn load(address: u64, size: u32) -> Self {
        Self::new(AccessKind::Load, address, size)
    }

    /// Shorthand for a store record.
    pub const fn store(address: u64, size: u32) -> Self {
        Self::new(AccessKind::Store, address, size)
    }

    /// Shorthand for a modify record.
    pub const fn modify(address: u64, size: u32) -> Self {
        Self::new(AccessKind::Modify, address, size)
    }
}

impl fmt::Display for AccessRecord {
    /// Formats the record the way it appears in a trace, e.g. `L 7ff000398,8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x},{}", self.kind.op(), self.address, self.size)
    }
}
