//! Ordered presence sets a min-queue can be built on.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::key::UniverseKey;
use crate::tree::UniverseTree;

/// Set of distinct values with cheap access to its minimum.
///
/// This is the seam between a queue and its ordered structure:
/// - [`UniverseTree`]: bounded universe, O(log log U) updates, O(1) min
/// - `BTreeSet`: any value of `K`, O(log n) updates and min
pub trait MinSet<K: UniverseKey> {
    /// Add `key`; `Ok(false)` if it was already present.
    ///
    /// Must validate before mutating: an `Err` leaves the set unchanged.
    fn insert(&mut self, key: K) -> Result<bool>;

    /// Remove `key`; `false` (and no change) if it was absent.
    fn remove(&mut self, key: K) -> bool;

    fn contains(&self, key: K) -> bool;

    fn min(&self) -> Option<K>;

    fn max(&self) -> Option<K>;

    /// Number of distinct values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Exclusive upper bound on accepted values, `None` if unbounded.
    fn universe(&self) -> Option<u64>;
}

impl<K: UniverseKey> MinSet<K> for UniverseTree<K> {
    #[inline]
    fn insert(&mut self, key: K) -> Result<bool> {
        UniverseTree::insert(self, key)
    }

    #[inline]
    fn remove(&mut self, key: K) -> bool {
        UniverseTree::remove(self, key)
    }

    #[inline]
    fn contains(&self, key: K) -> bool {
        UniverseTree::contains(self, key)
    }

    #[inline]
    fn min(&self) -> Option<K> {
        UniverseTree::min(self)
    }

    #[inline]
    fn max(&self) -> Option<K> {
        UniverseTree::max(self)
    }

    #[inline]
    fn len(&self) -> usize {
        UniverseTree::len(self)
    }

    fn clear(&mut self) {
        UniverseTree::clear(self)
    }

    fn universe(&self) -> Option<u64> {
        Some(UniverseTree::universe(self))
    }
}

impl<K: UniverseKey> MinSet<K> for BTreeSet<K> {
    #[inline]
    fn insert(&mut self, key: K) -> Result<bool> {
        Ok(BTreeSet::insert(self, key))
    }

    #[inline]
    fn remove(&mut self, key: K) -> bool {
        BTreeSet::remove(self, &key)
    }

    #[inline]
    fn contains(&self, key: K) -> bool {
        BTreeSet::contains(self, &key)
    }

    #[inline]
    fn min(&self) -> Option<K> {
        self.first().copied()
    }

    #[inline]
    fn max(&self) -> Option<K> {
        self.last().copied()
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    fn universe(&self) -> Option<u64> {
        None
    }
}
