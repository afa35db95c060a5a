//! Core constants for the universe tree and min-queue.

/// Sentinel value for an empty/null arena index.
///
/// Used to indicate:
/// - Unallocated summary of a tree node
/// - Unallocated slot in a node's cluster table
pub const EMPTY: u32 = u32::MAX;

/// Bit width of the base-case universe (u = 2).
///
/// Nodes at this width keep presence of 0 and 1 in their cached
/// `min`/`max` fields and own no summary or clusters.
pub const BASE_UNIVERSE_BITS: u32 = 1;

/// Largest supported universe, as a bit width (U = 2^32).
///
/// The root cluster table of a k-bit universe holds 2^ceil(k/2) slots,
/// so 32 bits keeps it at 65536 entries.
pub const MAX_UNIVERSE_BITS: u32 = 32;

/// Default universe bit width (U = 2^15).
pub const DEFAULT_UNIVERSE_BITS: u32 = 15;

/// Default universe size used by `QueueConfig::default()`.
pub const DEFAULT_UNIVERSE: u64 = 1 << DEFAULT_UNIVERSE_BITS;
