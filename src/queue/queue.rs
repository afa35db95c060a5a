//! FIFO queue with an O(1) running minimum.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use log::debug;

use crate::counter::Multiplicity;
use crate::error::{Error, Result};
use crate::key::UniverseKey;
use crate::min_set::MinSet;
use crate::queue::QueueConfig;
use crate::tree::UniverseTree;

/// FIFO queue that can report the minimum of its current contents.
///
/// Composes three owned parts:
/// - a FIFO (`VecDeque`) holding every enqueued value in arrival order
/// - a [`Multiplicity`] counter, since the queue may hold duplicates
/// - a [`MinSet`] holding each distinct value once
///
/// A value is in the set exactly when its multiplicity is positive, so the
/// set's min is the min of the queue.
///
/// # Performance (default `UniverseTree` strategy)
/// - enqueue / dequeue: O(log log U) plus one hash update
/// - find_min / find_max / size: O(1)
///
/// # Example
/// ```rust
/// use veb_min_queue::MinQueue;
///
/// let mut queue = MinQueue::<u32>::new(1 << 15).unwrap();
/// for value in [3, 6, 1, 4] {
///     queue.enqueue(value).unwrap();
/// }
/// assert_eq!(queue.find_min(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct MinQueue<K: UniverseKey = u64, S: MinSet<K> = UniverseTree<K>> {
    fifo: VecDeque<K>,
    counts: Multiplicity<K>,
    set: S,
}

/// Min-queue over an unbounded ordered set (O(log n) per operation).
pub type OrderedMinQueue<K = u64> = MinQueue<K, BTreeSet<K>>;

impl<K: UniverseKey> MinQueue<K> {
    /// Create an empty queue accepting values in `[0, universe)`.
    ///
    /// # Errors
    /// `UniverseExhausted` if `universe` is not a power of two in `2..=2^32`
    /// or is wider than `K`.
    pub fn new(universe: u64) -> Result<Self> {
        Self::with_config(QueueConfig::default().with_universe(universe))
    }

    /// Create an empty queue from a configuration.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        let tree = UniverseTree::new(config.universe)?;
        debug!(
            "created min-queue over universe {} (capacity {})",
            config.universe, config.capacity
        );

        Ok(Self {
            fifo: VecDeque::with_capacity(config.capacity),
            counts: Multiplicity::with_capacity(config.capacity),
            set: tree,
        })
    }
}

impl<K: UniverseKey> OrderedMinQueue<K> {
    /// Create an empty queue backed by a `BTreeSet`.
    ///
    /// Accepts every value of `K`; never fails with `OutOfRange`.
    pub fn ordered() -> Self {
        Self::with_set(BTreeSet::new())
    }
}

impl<K: UniverseKey, S: MinSet<K>> MinQueue<K, S> {
    /// Create an empty queue on top of `set`.
    ///
    /// The set is cleared first, since the queue must own every value in it.
    pub fn with_set(mut set: S) -> Self {
        set.clear();
        Self {
            fifo: VecDeque::new(),
            counts: Multiplicity::new(),
            set,
        }
    }

    /// Append `value` at the back of the queue.
    ///
    /// # Errors
    /// `OutOfRange` if the set has a universe and `value` is not below it.
    /// Nothing is modified in that case.
    pub fn enqueue(&mut self, value: K) -> Result<()> {
        if let Some(universe) = self.set.universe() {
            if value.to_u64() >= universe {
                return Err(Error::OutOfRange {
                    value: value.to_u64(),
                    universe,
                });
            }
        }

        if self.counts.count(value) == 0 {
            self.set.insert(value)?;
        }
        self.counts.increment(value);
        self.fifo.push_back(value);
        Ok(())
    }

    /// Remove and return the value at the front of the queue.
    ///
    /// # Errors
    /// `Empty` if the queue holds no values; repeated calls keep failing.
    pub fn dequeue(&mut self) -> Result<K> {
        let value = self.fifo.pop_front().ok_or(Error::Empty)?;
        if self.counts.decrement(value) == Some(true) {
            let removed = self.set.remove(value);
            debug_assert!(removed, "{value} counted but missing from the set");
        }
        Ok(value)
    }

    /// Smallest value currently enqueued.
    ///
    /// # Errors
    /// `Empty` if the queue holds no values.
    #[inline]
    pub fn find_min(&self) -> Result<K> {
        self.set.min().ok_or(Error::Empty)
    }

    /// Largest value currently enqueued.
    #[inline]
    pub fn find_max(&self) -> Result<K> {
        self.set.max().ok_or(Error::Empty)
    }

    /// Value at the front of the queue, without removing it.
    #[inline]
    pub fn peek(&self) -> Result<K> {
        self.fifo.front().copied().ok_or(Error::Empty)
    }

    /// Number of enqueued values, duplicates included.
    #[inline]
    pub fn size(&self) -> usize {
        self.fifo.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }

    /// How many times `value` is currently enqueued.
    #[inline]
    pub fn count(&self, value: K) -> usize {
        self.counts.count(value)
    }

    /// Number of distinct values currently enqueued.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.set.len()
    }

    /// Exclusive upper bound on accepted values, `None` if unbounded.
    pub fn universe(&self) -> Option<u64> {
        self.set.universe()
    }

    /// Iterate values front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = K> + ExactSizeIterator + '_ {
        self.fifo.iter().copied()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.fifo.clear();
        self.counts.clear();
        self.set.clear();
    }
}

impl<K: UniverseKey> Default for MinQueue<K> {
    /// Queue over `2^15` values, or the whole key type if it is narrower.
    fn default() -> Self {
        Self::with_set(UniverseTree::default())
    }
}

impl<K: UniverseKey, S: MinSet<K>> fmt::Display for MinQueue<K, S> {
    /// Front-to-back contents, e.g. `[3, 6, 7]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.fifo.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
