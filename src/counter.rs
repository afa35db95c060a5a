//! Multiplicity counter: outstanding occurrences per value.

use log::trace;
use rustc_hash::FxHashMap;

use crate::key::UniverseKey;

/// Mapping from value to its number of outstanding occurrences.
///
/// Only values with a positive count have an entry; an entry is removed as
/// soon as its count drops to zero. A queue pairs this with a set that holds
/// each distinct value once.
#[derive(Debug, Clone)]
pub struct Multiplicity<K: UniverseKey> {
    counts: FxHashMap<K, usize>,
}

impl<K: UniverseKey> Multiplicity<K> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Create an empty counter with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record one more occurrence of `key`.
    ///
    /// # Returns
    /// `true` if this is the first outstanding occurrence (count went 0 → 1)
    pub fn increment(&mut self, key: K) -> bool {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;

        let first = *count == 1;
        if first {
            trace!("multiplicity of {key} went 0 -> 1");
        }
        first
    }

    /// Drop one occurrence of `key`.
    ///
    /// # Returns
    /// * `None` if `key` had no outstanding occurrence
    /// * `Some(true)` if that was the last one; the entry is removed
    /// * `Some(false)` if occurrences remain
    pub fn decrement(&mut self, key: K) -> Option<bool> {
        let count = self.counts.get_mut(&key)?;
        *count -= 1;

        let drained = *count == 0;
        if drained {
            self.counts.remove(&key);
            trace!("multiplicity of {key} went 1 -> 0");
        }
        Some(drained)
    }

    /// Outstanding occurrences of `key` (0 if absent).
    #[inline]
    pub fn count(&self, key: K) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct values with a positive count.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Forget every value.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<K: UniverseKey> Default for Multiplicity<K> {
    fn default() -> Self {
        Self::new()
    }
}
