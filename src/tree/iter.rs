//! Iterator support for UniverseTree traversal.
//!
//! Both directions walk the set through successor/predecessor queries,
//! starting from the cached min or max.
//!
//! # Performance
//! - O(1) setup (cached root min/max)
//! - O(log log U) per element

use core::iter::FusedIterator;

use crate::key::UniverseKey;
use crate::tree::UniverseTree;

/// Iterator over values in ascending order.
///
/// # Example
/// ```rust
/// use veb_min_queue::UniverseTree;
///
/// let mut tree = UniverseTree::<u64>::new(1 << 10).unwrap();
/// tree.insert(30).unwrap();
/// tree.insert(10).unwrap();
/// tree.insert(20).unwrap();
///
/// let values: Vec<u64> = tree.iter().collect();
/// assert_eq!(values, vec![10, 20, 30]);
/// ```
pub struct Iter<'a, K: UniverseKey> {
    tree: &'a UniverseTree<K>,

    /// Next value to yield
    next: Option<u64>,

    /// Values not yet yielded
    remaining: usize,
}

impl<'a, K: UniverseKey> Iter<'a, K> {
    pub(crate) fn new(tree: &'a UniverseTree<K>) -> Self {
        Self {
            tree,
            next: tree.min().map(K::to_u64),
            remaining: tree.len(),
        }
    }
}

impl<K: UniverseKey> Iterator for Iter<'_, K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        let current = self.next?;
        self.next = self.tree.raw_successor(current);
        self.remaining -= 1;
        Some(K::from_u64(current))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: UniverseKey> ExactSizeIterator for Iter<'_, K> {}

impl<K: UniverseKey> FusedIterator for Iter<'_, K> {}

/// Iterator over values in descending order.
pub struct IterDesc<'a, K: UniverseKey> {
    tree: &'a UniverseTree<K>,
    next: Option<u64>,
    remaining: usize,
}

impl<'a, K: UniverseKey> IterDesc<'a, K> {
    pub(crate) fn new(tree: &'a UniverseTree<K>) -> Self {
        Self {
            tree,
            next: tree.max().map(K::to_u64),
            remaining: tree.len(),
        }
    }
}

impl<K: UniverseKey> Iterator for IterDesc<'_, K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        let current = self.next?;
        self.next = self.tree.raw_predecessor(current);
        self.remaining -= 1;
        Some(K::from_u64(current))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: UniverseKey> ExactSizeIterator for IterDesc<'_, K> {}

impl<K: UniverseKey> FusedIterator for IterDesc<'_, K> {}
