//! Recycling of emptied nodes, bucketed by universe width.

use crate::constants::MAX_UNIVERSE_BITS;

/// Stacks of released arena indices, one per node width.
///
/// A released node is empty, and every cluster it still references is
/// empty too, so it can be handed back for any slot of the same width.
#[derive(Debug, Clone)]
pub struct FreeList {
    by_bits: Vec<Vec<u32>>,
}

impl FreeList {
    /// Create an empty free list.
    pub fn new() -> Self {
        Self {
            by_bits: vec![Vec::new(); MAX_UNIVERSE_BITS as usize + 1],
        }
    }

    /// Remember `index` as reusable for nodes of `bits` width.
    #[inline]
    pub fn push(&mut self, bits: u32, index: u32) {
        self.by_bits[bits as usize].push(index);
    }

    /// Take a released index of `bits` width, if any.
    #[inline]
    pub fn pop(&mut self, bits: u32) -> Option<u32> {
        self.by_bits[bits as usize].pop()
    }
}

impl Default for FreeList {
    fn default() -> Self {
        Self::new()
    }
}
