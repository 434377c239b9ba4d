//! Stable item identity
//!
//! Every entry in an upload list gets an id at creation time. Ids are
//! never reused within a collection, so a callback holding a stale id
//! always fails lookup instead of touching a different item.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an item in an ordered collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Raw value for crossing the WASM boundary (BigInt on the JS side)
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild an id received from the WASM boundary
    pub fn from_u64(raw: u64) -> Self {
        ItemId(raw)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator scoped to one collection.
///
/// Counter-based: each call advances the counter, so every id handed out
/// over the allocator's lifetime is distinct.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id. Never fails, never repeats.
    pub fn allocate(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}
