//! Node structure for the recursive universe tree.

use crate::constants::{BASE_UNIVERSE_BITS, EMPTY};
use crate::key::split_bits;

/// One level of the universe tree, covering values in `[0, 2^bits)`.
///
/// # Cached fields
/// `min` and `max` are the smallest and largest values present. The value
/// held in `min` is never stored in any cluster: it lives only in the
/// cached field until a smaller value displaces it.
///
/// # Children
/// - `summary`: arena index of a node over `2^summary_bits` recording which
///   clusters are non-empty, or `EMPTY` while unallocated
/// - `clusters`: one arena index per cluster (each over `2^cluster_bits`),
///   `EMPTY` for clusters that hold nothing. A cluster that empties is
///   detached and released to the arena for reuse. The table itself stays
///   empty until the node first recurses.
///
/// # Base case
/// A node with `bits == 1` (universe 2) has no summary or clusters.
/// Presence of 0 and 1 is read straight off `min`/`max`.
#[derive(Debug, Clone)]
pub struct Node {
    /// Smallest value present, `None` if the node is empty.
    pub min: Option<u64>,

    /// Largest value present, `None` if the node is empty.
    pub max: Option<u64>,

    /// Universe width of this node in bits.
    pub bits: u32,

    /// Arena index of the summary node.
    pub summary: u32,

    /// Arena indices of the cluster nodes.
    pub clusters: Box<[u32]>,
}

impl Node {
    /// Create a new empty node over `2^bits` values.
    ///
    /// No children are allocated.
    #[inline]
    pub fn new(bits: u32) -> Self {
        debug_assert!(bits >= BASE_UNIVERSE_BITS, "node universe below base case");
        Node {
            min: None,
            max: None,
            bits,
            summary: EMPTY,
            clusters: Box::default(),
        }
    }

    /// Check if the node holds no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Check if this is a base-case node (universe 2).
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.bits <= BASE_UNIVERSE_BITS
    }

    /// Width of each cluster's universe in bits.
    #[inline(always)]
    pub fn cluster_bits(&self) -> u32 {
        split_bits(self.bits).1
    }

    /// Number of clusters (and size of the summary universe).
    #[inline(always)]
    pub fn cluster_count(&self) -> usize {
        1usize << split_bits(self.bits).0
    }

    /// Arena index of cluster `high`, or `EMPTY` if it was never allocated.
    #[inline(always)]
    pub fn cluster(&self, high: u64) -> u32 {
        self.clusters.get(high as usize).copied().unwrap_or(EMPTY)
    }
}
