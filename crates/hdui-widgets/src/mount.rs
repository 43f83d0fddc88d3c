#![forbid(unsafe_code)]

//! Stable item identity for mounted list rows.
//!
//! A windowed list mounts and unmounts rows as the window slides. Keying rows
//! by their position in the window would hand one row's per-instance state to
//! a different item whenever the list is reordered or an item is inserted
//! above the window. Rows are therefore keyed by an [`ItemKey`] derived from
//! the item itself, and [`MountTracker`] reports which keys entered and left
//! the window between two renders.

use ahash::{AHashSet, RandomState};
use std::hash::Hash;

/// Fixed seeds so keys are stable across runs and processes.
const KEY_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Identity of a list item, independent of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

impl ItemKey {
    /// Key an item by position. Only correct for lists that never reorder.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Key an item by hashing a stable identifier (e.g. a post id).
    #[must_use]
    pub fn of<K: Hash + ?Sized>(id: &K) -> Self {
        let (a, b, c, d) = KEY_SEEDS;
        Self(RandomState::with_seeds(a, b, c, d).hash_one(id))
    }
}

impl From<u64> for ItemKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Keys that entered and left the window in one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountDiff {
    /// Newly mounted keys, in window order.
    pub mounted: Vec<ItemKey>,
    /// Keys no longer mounted, in their previous window order.
    pub unmounted: Vec<ItemKey>,
}

impl MountDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

/// Remembers the mounted keys of the previous render.
#[derive(Debug, Clone, Default)]
pub struct MountTracker {
    current: Vec<ItemKey>,
    last_diff: MountDiff,
}

impl MountTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys mounted by the latest render, in window order.
    #[must_use]
    pub fn keys(&self) -> &[ItemKey] {
        &self.current
    }

    /// Diff produced by the latest [`MountTracker::commit`].
    #[must_use]
    pub fn last_diff(&self) -> &MountDiff {
        &self.last_diff
    }

    /// Replace the mounted set and compute the diff against the previous one.
    pub fn commit(&mut self, next: Vec<ItemKey>) -> &MountDiff {
        let before: AHashSet<ItemKey> = self.current.iter().copied().collect();
        let after: AHashSet<ItemKey> = next.iter().copied().collect();

        self.last_diff = MountDiff {
            mounted: next.iter().copied().filter(|k| !before.contains(k)).collect(),
            unmounted: self
                .current
                .iter()
                .copied()
                .filter(|k| !after.contains(k))
                .collect(),
        };
        self.current = next;
        &self.last_diff
    }

    /// Forget everything (e.g. when the list is replaced wholesale).
    pub fn clear(&mut self) -> &MountDiff {
        self.commit(Vec::new())
    }
}
