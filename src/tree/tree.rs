//! Main UniverseTree structure for bounded integer sets.

use core::marker::PhantomData;

use log::debug;

use crate::arena::NodeArena;
use crate::constants::{BASE_UNIVERSE_BITS, DEFAULT_UNIVERSE_BITS, MAX_UNIVERSE_BITS};
use crate::error::{Error, Result};
use crate::key::UniverseKey;
use crate::tree::{Iter, IterDesc};

/// Index of the root node in every tree's arena.
const ROOT: u32 = 0;

/// Validate a universe size and return its bit width.
///
/// The universe must be a power of two, at least 2, and no wider than both
/// `MAX_UNIVERSE_BITS` and `key_bits`.
pub(crate) fn universe_bits(universe: u64, key_bits: u32) -> Result<u32> {
    let exhausted = Error::UniverseExhausted {
        requested: universe,
    };
    if universe < 2 || !universe.is_power_of_two() {
        return Err(exhausted);
    }

    let bits = universe.trailing_zeros();
    if bits > MAX_UNIVERSE_BITS || bits > key_bits {
        return Err(exhausted);
    }
    Ok(bits)
}

/// Ordered set of distinct integers in `[0, U)` with O(log log U) updates.
///
/// A Van Emde Boas style tree: every node caches its min and max, and splits
/// its universe into a summary plus clusters of half the bit width. Nodes
/// live in a single arena and refer to each other by index.
///
/// # Key Features
/// - O(1) min/max via cached root fields
/// - O(log log U) insert, remove, contains, successor, predecessor
/// - Lazy allocation: summaries and clusters created on first use
///
/// # Example
/// ```rust
/// use veb_min_queue::UniverseTree;
///
/// let mut tree = UniverseTree::<u32>::new(1 << 16).unwrap();
/// tree.insert(300).unwrap();
/// tree.insert(7).unwrap();
/// assert_eq!(tree.min(), Some(7));
/// assert_eq!(tree.successor(7), Some(300));
/// ```
#[derive(Debug, Clone)]
pub struct UniverseTree<K: UniverseKey = u64> {
    /// Node storage; the root is always at index 0
    nodes: NodeArena,

    /// Universe width in bits (U = 2^bits)
    bits: u32,

    /// Number of distinct values stored
    len: usize,

    _phantom: PhantomData<K>,
}

impl<K: UniverseKey> UniverseTree<K> {
    /// Create an empty tree over `[0, universe)`.
    ///
    /// # Errors
    /// `UniverseExhausted` if `universe` is not a power of two, is below 2,
    /// exceeds 2^32, or cannot be addressed by `K`.
    pub fn new(universe: u64) -> Result<Self> {
        let bits = universe_bits(universe, K::BITS)?;
        Ok(Self::from_bits(bits))
    }

    /// Create an empty tree over `[0, 2^bits)`.
    ///
    /// # Errors
    /// `UniverseExhausted` if `bits` is 0 or too wide (see [`UniverseTree::new`]).
    pub fn with_bits(bits: u32) -> Result<Self> {
        if !(BASE_UNIVERSE_BITS..=MAX_UNIVERSE_BITS).contains(&bits) || bits > K::BITS {
            return Err(Error::UniverseExhausted {
                requested: 1u64.checked_shl(bits).unwrap_or(u64::MAX),
            });
        }
        Ok(Self::from_bits(bits))
    }

    fn from_bits(bits: u32) -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.alloc(bits);
        debug_assert_eq!(root, ROOT);
        debug!("created universe tree over 2^{bits} values");

        Self {
            nodes,
            bits,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Universe size U; valid values are `0..U`.
    #[inline]
    pub fn universe(&self) -> u64 {
        1u64 << self.bits
    }

    /// Universe width in bits.
    #[inline]
    pub fn universe_bits(&self) -> u32 {
        self.bits
    }

    #[inline(always)]
    fn in_universe(&self, value: u64) -> bool {
        value < self.universe()
    }

    /// Insert a value.
    ///
    /// # Returns
    /// * `Ok(true)` if the value was newly inserted
    /// * `Ok(false)` if it was already present (no-op)
    ///
    /// # Errors
    /// `OutOfRange` if the value is not below the universe size. The tree
    /// is left untouched.
    ///
    /// # Performance
    /// O(log log U)
    pub fn insert(&mut self, key: K) -> Result<bool> {
        let value = key.to_u64();
        if !self.in_universe(value) {
            return Err(Error::OutOfRange {
                value,
                universe: self.universe(),
            });
        }
        if self.nodes.member_at(ROOT, value) {
            return Ok(false);
        }

        self.nodes.insert_at(ROOT, value);
        self.len += 1;
        Ok(true)
    }

    /// Remove a value.
    ///
    /// Removing an absent value (including one outside the universe) is a
    /// no-op.
    ///
    /// # Returns
    /// * `true` if the value was present and removed
    /// * `false` otherwise
    ///
    /// # Performance
    /// O(log log U)
    pub fn remove(&mut self, key: K) -> bool {
        let value = key.to_u64();
        if !self.in_universe(value) || !self.nodes.member_at(ROOT, value) {
            return false;
        }

        self.nodes.delete_at(ROOT, value);
        self.len -= 1;
        true
    }

    /// Check if a value is present.
    ///
    /// # Performance
    /// O(log log U)
    pub fn contains(&self, key: K) -> bool {
        let value = key.to_u64();
        self.in_universe(value) && self.nodes.member_at(ROOT, value)
    }

    /// Smallest value present.
    ///
    /// # Performance
    /// O(1) - cached root field
    #[inline]
    pub fn min(&self) -> Option<K> {
        self.nodes.min_of(ROOT).map(K::from_u64)
    }

    /// Largest value present.
    ///
    /// # Performance
    /// O(1) - cached root field
    #[inline]
    pub fn max(&self) -> Option<K> {
        self.nodes.max_of(ROOT).map(K::from_u64)
    }

    /// Smallest value strictly greater than `key`.
    ///
    /// # Performance
    /// O(log log U)
    pub fn successor(&self, key: K) -> Option<K> {
        let value = key.to_u64();
        if !self.in_universe(value) {
            return None;
        }
        self.nodes.successor_at(ROOT, value).map(K::from_u64)
    }

    /// Largest value strictly less than `key`.
    ///
    /// A `key` past the universe has every element below it, so the answer
    /// is the max.
    ///
    /// # Performance
    /// O(log log U)
    pub fn predecessor(&self, key: K) -> Option<K> {
        let value = key.to_u64();
        if !self.in_universe(value) {
            return self.max();
        }
        self.nodes.predecessor_at(ROOT, value).map(K::from_u64)
    }

    /// Number of distinct values stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every value and release all nodes but a fresh root.
    pub fn clear(&mut self) {
        let mut nodes = NodeArena::new();
        nodes.alloc(self.bits);
        self.nodes = nodes;
        self.len = 0;
    }

    /// Number of nodes held by the arena, released ones included.
    ///
    /// Nodes are created lazily. A cluster that empties goes back to the
    /// arena and is reused by the next cluster of the same width, so this
    /// tracks the peak footprint rather than every cluster ever touched.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate values in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Iterate values in descending order.
    pub fn iter_desc(&self) -> IterDesc<'_, K> {
        IterDesc::new(self)
    }

    #[inline(always)]
    pub(crate) fn raw_successor(&self, value: u64) -> Option<u64> {
        self.nodes.successor_at(ROOT, value)
    }

    #[inline(always)]
    pub(crate) fn raw_predecessor(&self, value: u64) -> Option<u64> {
        self.nodes.predecessor_at(ROOT, value)
    }
}

impl<K: UniverseKey> Default for UniverseTree<K> {
    /// Tree over `2^15` values, or the whole key type if it is narrower.
    fn default() -> Self {
        Self::from_bits(DEFAULT_UNIVERSE_BITS.min(K::BITS))
    }
}

impl<'a, K: UniverseKey> IntoIterator for &'a UniverseTree<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
