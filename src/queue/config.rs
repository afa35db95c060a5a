//! Construction parameters for min-queues.

use crate::constants::{DEFAULT_UNIVERSE, MAX_UNIVERSE_BITS};
use crate::error::Result;
use crate::tree::universe_bits;

/// Configuration for a universe-tree backed queue.
///
/// The universe is fixed for the queue's lifetime and must exceed every
/// value ever enqueued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Universe size U (power of two, 2..=2^32); values must be `< U`
    pub universe: u64,
    /// Initial FIFO capacity hint
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            universe: DEFAULT_UNIVERSE,
            capacity: 0,
        }
    }
}

impl QueueConfig {
    /// Set the universe size.
    pub fn with_universe(mut self, universe: u64) -> Self {
        self.universe = universe;
        self
    }

    /// Set the initial FIFO capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the universe size.
    ///
    /// # Errors
    /// `UniverseExhausted` if the universe is not a power of two in `2..=2^32`.
    pub fn validate(&self) -> Result<()> {
        universe_bits(self.universe, MAX_UNIVERSE_BITS).map(|_| ())
    }
}
