//! Recursive universe tree algorithms over the node arena.
//!
//! Every function takes the arena index of the node to operate on and a
//! value local to that node's universe. Recursion descends into a cluster
//! (half the bits) and at most one summary per level, so depth is
//! O(log log U).

use log::trace;

use crate::arena::NodeArena;
use crate::constants::EMPTY;
use crate::key::{high, index, low, split_bits};

impl NodeArena {
    /// Cached minimum of node `idx`, `None` if empty or unallocated.
    #[inline(always)]
    pub(crate) fn min_of(&self, idx: u32) -> Option<u64> {
        if idx == EMPTY {
            None
        } else {
            self.get(idx).min
        }
    }

    /// Cached maximum of node `idx`, `None` if empty or unallocated.
    #[inline(always)]
    pub(crate) fn max_of(&self, idx: u32) -> Option<u64> {
        if idx == EMPTY {
            None
        } else {
            self.get(idx).max
        }
    }

    /// Return the summary of node `idx`, allocating it on first use.
    fn ensure_summary(&mut self, idx: u32) -> u32 {
        let node = self.get(idx);
        if node.summary != EMPTY {
            return node.summary;
        }

        let (summary_bits, _) = split_bits(node.bits);
        let summary = self.alloc(summary_bits);
        self.get_mut(idx).summary = summary;
        trace!("allocated summary {summary} ({summary_bits} bits) for node {idx}");
        summary
    }

    /// Return cluster `high` of node `idx`, allocating the cluster table
    /// on first use and the cluster whenever the slot is vacant.
    fn ensure_cluster(&mut self, idx: u32, high: u64) -> u32 {
        let node = self.get_mut(idx);
        if node.clusters.is_empty() {
            node.clusters = vec![EMPTY; node.cluster_count()].into_boxed_slice();
        }

        let existing = node.clusters[high as usize];
        if existing != EMPTY {
            return existing;
        }

        let cluster_bits = node.cluster_bits();
        let cluster = self.alloc(cluster_bits);
        self.get_mut(idx).clusters[high as usize] = cluster;
        trace!("allocated cluster {cluster} ({cluster_bits} bits) at slot {high} of node {idx}");
        cluster
    }

    /// Insert `x` into node `idx`.
    ///
    /// `x` must not already be present. Inserting into an empty node only
    /// sets the cached fields, which is what keeps the bound at
    /// O(log log U): at each level either the cluster was empty (and the
    /// nested insert is O(1)) or the summary is left untouched.
    pub(crate) fn insert_at(&mut self, idx: u32, x: u64) {
        let node = self.get_mut(idx);
        let (min, max) = match (node.min, node.max) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                node.min = Some(x);
                node.max = Some(x);
                return;
            }
        };

        // The smaller of the two stays cached; the other one goes down.
        let mut x = x;
        if x < min {
            node.min = Some(x);
            x = min;
        }
        if x > max {
            node.max = Some(x);
        }
        if node.is_leaf() {
            return;
        }

        let cluster_bits = node.cluster_bits();
        let (h, l) = (high(x, cluster_bits), low(x, cluster_bits));
        let cluster = self.ensure_cluster(idx, h);
        if self.get(cluster).is_empty() {
            let summary = self.ensure_summary(idx);
            self.insert_at(summary, h);
        }
        self.insert_at(cluster, l);
    }

    /// Delete `x` from node `idx`.
    ///
    /// `x` must be present; the public API checks membership first.
    pub(crate) fn delete_at(&mut self, idx: u32, x: u64) {
        let node = self.get_mut(idx);
        let (Some(min), Some(max)) = (node.min, node.max) else {
            unreachable!("delete from empty node {idx}");
        };

        if min == max {
            debug_assert_eq!(x, min);
            node.min = None;
            node.max = None;
            return;
        }

        if node.is_leaf() {
            // Both 0 and 1 are present; the other one remains.
            let remaining = x ^ 1;
            node.min = Some(remaining);
            node.max = Some(remaining);
            return;
        }

        let cluster_bits = node.cluster_bits();
        let summary = node.summary;

        // Deleting the cached min: pull the next smallest value up out of
        // the first non-empty cluster, then delete that one below instead.
        let mut x = x;
        if x == min {
            let Some(first) = self.min_of(summary) else {
                unreachable!("node {idx} holds two values but its summary is empty");
            };
            let Some(offset) = self.min_of(self.get(idx).cluster(first)) else {
                unreachable!("summary of node {idx} marks an empty cluster {first}");
            };
            x = index(first, offset, cluster_bits);
            self.get_mut(idx).min = Some(x);
        }

        let (h, l) = (high(x, cluster_bits), low(x, cluster_bits));
        let cluster = self.get(idx).cluster(h);
        self.delete_at(cluster, l);

        if self.get(cluster).is_empty() {
            self.get_mut(idx).clusters[h as usize] = EMPTY;
            self.release(cluster);
            trace!("released cluster {cluster} from slot {h} of node {idx}");
            self.delete_at(summary, h);
            if x == max {
                let new_max = match self.max_of(summary) {
                    Some(last) => self
                        .max_of(self.get(idx).cluster(last))
                        .map(|offset| index(last, offset, cluster_bits)),
                    None => self.get(idx).min,
                };
                self.get_mut(idx).max = new_max;
            }
        } else if x == max {
            let new_max = self
                .max_of(cluster)
                .map(|offset| index(h, offset, cluster_bits));
            self.get_mut(idx).max = new_max;
        }
    }

    /// Check whether `x` is present in node `idx`.
    ///
    /// Iterative: each step moves one level down into a cluster.
    pub(crate) fn member_at(&self, idx: u32, x: u64) -> bool {
        let mut idx = idx;
        let mut x = x;
        loop {
            if idx == EMPTY {
                return false;
            }
            let node = self.get(idx);
            match node.min {
                None => return false,
                Some(min) if min == x => return true,
                Some(_) => {}
            }
            if node.max == Some(x) {
                return true;
            }
            if node.is_leaf() {
                return false;
            }

            let cluster_bits = node.cluster_bits();
            idx = node.cluster(high(x, cluster_bits));
            x = low(x, cluster_bits);
        }
    }

    /// Smallest value in node `idx` strictly greater than `x`.
    pub(crate) fn successor_at(&self, idx: u32, x: u64) -> Option<u64> {
        if idx == EMPTY {
            return None;
        }
        let node = self.get(idx);

        if node.is_leaf() {
            return if x == 0 && node.max == Some(1) {
                Some(1)
            } else {
                None
            };
        }

        match node.min {
            None => return None,
            Some(min) if x < min => return Some(min),
            Some(_) => {}
        }

        let cluster_bits = node.cluster_bits();
        let (h, l) = (high(x, cluster_bits), low(x, cluster_bits));
        let cluster = node.cluster(h);

        // Answer inside x's own cluster
        if let Some(max_low) = self.max_of(cluster) {
            if l < max_low {
                let offset = self.successor_at(cluster, l)?;
                return Some(index(h, offset, cluster_bits));
            }
        }

        // Otherwise the minimum of the next non-empty cluster
        let next = self.successor_at(node.summary, h)?;
        let offset = self.min_of(node.cluster(next))?;
        Some(index(next, offset, cluster_bits))
    }

    /// Largest value in node `idx` strictly less than `x`.
    pub(crate) fn predecessor_at(&self, idx: u32, x: u64) -> Option<u64> {
        if idx == EMPTY {
            return None;
        }
        let node = self.get(idx);

        if node.is_leaf() {
            return if x == 1 && node.min == Some(0) {
                Some(0)
            } else {
                None
            };
        }

        match node.max {
            None => return None,
            Some(max) if x > max => return Some(max),
            Some(_) => {}
        }

        let cluster_bits = node.cluster_bits();
        let (h, l) = (high(x, cluster_bits), low(x, cluster_bits));
        let cluster = node.cluster(h);

        if let Some(min_low) = self.min_of(cluster) {
            if l > min_low {
                let offset = self.predecessor_at(cluster, l)?;
                return Some(index(h, offset, cluster_bits));
            }
        }

        match self.predecessor_at(node.summary, h) {
            Some(prev) => self
                .max_of(node.cluster(prev))
                .map(|offset| index(prev, offset, cluster_bits)),
            // The cached min is kept out of the clusters.
            None => node.min.filter(|&min| x > min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(bits: u32, values: &[u64]) -> (NodeArena, u32) {
        let mut arena = NodeArena::new();
        let root = arena.alloc(bits);
        for &v in values {
            arena.insert_at(root, v);
        }
        (arena, root)
    }

    #[test]
    fn test_insert_into_empty_touches_only_cached_fields() {
        let (arena, root) = node_with(8, &[77]);

        let node = arena.get(root);
        assert_eq!(node.min, Some(77));
        assert_eq!(node.max, Some(77));
        assert_eq!(node.summary, EMPTY);
        assert!(node.clusters.is_empty());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_min_not_stored_in_clusters() {
        let (arena, root) = node_with(4, &[5, 9]);

        // 5 stays cached in the root, only 9 (cluster 2, offset 1) goes down
        let node = arena.get(root);
        assert_eq!(node.min, Some(5));
        assert_eq!(node.max, Some(9));
        assert_eq!(node.cluster(1), EMPTY);
        assert_eq!(arena.min_of(node.cluster(2)), Some(1));
        assert_eq!(arena.min_of(node.summary), Some(2));
    }

    #[test]
    fn test_smaller_insert_pushes_old_min_down() {
        let (arena, root) = node_with(4, &[9, 5]);

        let node = arena.get(root);
        assert_eq!(node.min, Some(5));
        assert_eq!(node.cluster(1), EMPTY);
        assert_eq!(arena.min_of(node.cluster(2)), Some(1));
    }

    #[test]
    fn test_emptied_cluster_is_detached_and_reused() {
        let (mut arena, root) = node_with(8, &[0, 200]);
        // cluster 12 and the summary
        assert_eq!(arena.len(), 3);
        let cluster = arena.get(root).cluster(12);

        arena.delete_at(root, 200);
        assert_eq!(arena.get(root).cluster(12), EMPTY);
        assert_eq!(arena.get(root).max, Some(0));

        arena.insert_at(root, 100);
        assert_eq!(arena.get(root).cluster(6), cluster);
        assert_eq!(arena.len(), 3);
        assert!(arena.member_at(root, 100));
        assert!(!arena.member_at(root, 200));
        assert_eq!(arena.successor_at(root, 0), Some(100));
    }

    #[test]
    fn test_leaf_holds_both_values() {
        let (mut arena, root) = node_with(1, &[1, 0]);

        assert_eq!(arena.get(root).min, Some(0));
        assert_eq!(arena.get(root).max, Some(1));
        assert!(arena.member_at(root, 0));
        assert!(arena.member_at(root, 1));

        arena.delete_at(root, 0);
        assert_eq!(arena.get(root).min, Some(1));
        assert_eq!(arena.get(root).max, Some(1));
        assert!(!arena.member_at(root, 0));

        arena.delete_at(root, 1);
        assert!(arena.get(root).is_empty());
        assert_eq!(arena.get(root).max, None);
    }

    #[test]
    fn test_delete_sole_element_clears_node() {
        let (mut arena, root) = node_with(6, &[42]);

        arena.delete_at(root, 42);
        assert_eq!(arena.get(root).min, None);
        assert_eq!(arena.get(root).max, None);
        assert!(!arena.member_at(root, 42));
    }

    #[test]
    fn test_delete_min_promotes_next() {
        let (mut arena, root) = node_with(8, &[10, 200, 30, 31]);

        arena.delete_at(root, 10);
        assert_eq!(arena.get(root).min, Some(30));
        assert_eq!(arena.get(root).max, Some(200));

        arena.delete_at(root, 30);
        assert_eq!(arena.get(root).min, Some(31));

        arena.delete_at(root, 31);
        assert_eq!(arena.get(root).min, Some(200));
        assert_eq!(arena.get(root).max, Some(200));
    }

    #[test]
    fn test_delete_max_recomputes() {
        let (mut arena, root) = node_with(8, &[10, 200, 30, 31]);

        arena.delete_at(root, 200);
        assert_eq!(arena.get(root).max, Some(31));

        arena.delete_at(root, 31);
        assert_eq!(arena.get(root).max, Some(30));

        arena.delete_at(root, 30);
        assert_eq!(arena.get(root).max, Some(10));
        assert_eq!(arena.get(root).min, Some(10));
    }

    #[test]
    fn test_successor_predecessor() {
        let (arena, root) = node_with(5, &[2, 3, 4, 5, 7, 14, 15]);

        assert_eq!(arena.successor_at(root, 0), Some(2));
        assert_eq!(arena.successor_at(root, 2), Some(3));
        assert_eq!(arena.successor_at(root, 5), Some(7));
        assert_eq!(arena.successor_at(root, 7), Some(14));
        assert_eq!(arena.successor_at(root, 15), None);
        assert_eq!(arena.successor_at(root, 31), None);

        assert_eq!(arena.predecessor_at(root, 31), Some(15));
        assert_eq!(arena.predecessor_at(root, 14), Some(7));
        assert_eq!(arena.predecessor_at(root, 7), Some(5));
        assert_eq!(arena.predecessor_at(root, 3), Some(2));
        assert_eq!(arena.predecessor_at(root, 2), None);
        assert_eq!(arena.predecessor_at(root, 0), None);
    }

    #[test]
    fn test_queries_on_unallocated_node() {
        let arena = NodeArena::new();
        assert!(!arena.member_at(EMPTY, 3));
        assert_eq!(arena.successor_at(EMPTY, 3), None);
        assert_eq!(arena.predecessor_at(EMPTY, 3), None);
        assert_eq!(arena.min_of(EMPTY), None);
        assert_eq!(arena.max_of(EMPTY), None);
    }
}
