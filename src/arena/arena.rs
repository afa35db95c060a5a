//! Arena structure for universe tree node storage.

use super::free_list::FreeList;
use crate::tree::Node;

/// Generic arena for storing tree elements.
///
/// Provides contiguous memory allocation with O(1) access by index.
/// Uses Vec for dynamic growth and cache-friendly layout.
///
/// # Type Parameters
/// * `T` - Element type (tree `Node`)
///
/// # Memory Layout
/// - Elements stored contiguously in Vec
/// - Index-based access (u32 indices)
/// - Grows dynamically as needed, never shrinks until dropped
/// - Released nodes are recycled before the Vec grows
///
/// # Performance
/// - Allocation: O(1) amortized
/// - Access: O(1) by index
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Storage for elements.
    ///
    /// Index in this Vec is the arena index used for references.
    elements: Vec<T>,

    /// Released indices waiting for reuse.
    free: FreeList,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    ///
    /// # Performance
    /// O(1) - creates empty Vec
    #[inline(always)]
    pub fn new() -> Self {
        Arena {
            elements: Vec::new(),
            free: FreeList::new(),
        }
    }

    /// Get element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    ///
    /// # Performance
    /// O(1) - direct Vec indexing
    #[inline(always)]
    pub fn get(&self, index: u32) -> &T {
        &self.elements[index as usize]
    }

    /// Get mutable element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        &mut self.elements[index as usize]
    }

    /// Get number of allocated elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Push an element and return its arena index.
    ///
    /// # Performance
    /// O(1) amortized - Vec push
    #[inline(always)]
    pub fn push(&mut self, element: T) -> u32 {
        let index = self.elements.len() as u32;
        debug_assert!(
            index != crate::constants::EMPTY,
            "arena index space exhausted"
        );
        self.elements.push(element);
        index
    }
}

impl Arena<Node> {
    /// Allocate an empty node covering a universe of `2^bits`.
    ///
    /// A node released at the same width is reused first.
    ///
    /// # Returns
    /// Arena index of the allocated node
    ///
    /// Hot path - always inlined.
    #[inline(always)]
    pub fn alloc(&mut self, bits: u32) -> u32 {
        match self.free.pop(bits) {
            Some(index) => index,
            None => self.push(Node::new(bits)),
        }
    }

    /// Hand an emptied node back for reuse.
    ///
    /// The node keeps its summary and cluster table; both are empty by the
    /// time the node itself is.
    #[inline]
    pub fn release(&mut self, index: u32) {
        let node = self.get(index);
        debug_assert!(node.is_empty(), "released node {index} still holds values");
        let bits = node.bits;
        self.free.push(bits, index);
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the tree node arena.
pub type NodeArena = Arena<Node>;
