//! Trait for universe key types (u8, u16, u32, u64, usize) and bit split helpers.

use core::fmt;
use core::hash::Hash;

/// Trait for unsigned integer values stored in a universe tree.
///
/// Values are widened to `u64` inside the tree; the key type only
/// matters at the API boundary.
pub trait UniverseKey: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    /// Number of value bits of the key type.
    ///
    /// A tree over this key type cannot have a universe wider than
    /// `2^BITS`.
    const BITS: u32;

    /// Widen the key to `u64`.
    ///
    /// # Performance
    /// O(1) - single cast
    fn to_u64(self) -> u64;

    /// Narrow a `u64` back to the key type.
    ///
    /// Only called with values that were produced by `to_u64` or that lie
    /// inside the tree's universe, so truncation never happens in practice.
    ///
    /// # Performance
    /// O(1) - single cast
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_universe_key {
    ($($ty:ty),*) => {
        $(
            impl UniverseKey for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_u64(value: u64) -> Self {
                    debug_assert!(value <= <$ty>::MAX as u64, "value does not fit key type");
                    value as $ty
                }
            }
        )*
    };
}

impl_universe_key!(u8, u16, u32, u64, usize);

/// Split a node's bit width into `(summary_bits, cluster_bits)`.
///
/// The cluster universe takes the lower half of the bits (rounded down) and
/// the summary takes the rest, so `2^summary_bits * 2^cluster_bits == 2^bits`
/// at every level.
///
/// # Examples
/// ```text
/// bits = 4  -> (2, 2)   16 = 4 clusters of 4
/// bits = 5  -> (3, 2)   32 = 8 clusters of 4
/// bits = 15 -> (8, 7)
/// ```
#[inline(always)]
pub(crate) fn split_bits(bits: u32) -> (u32, u32) {
    let cluster_bits = bits / 2;
    (bits - cluster_bits, cluster_bits)
}

/// Cluster number of `x`: its upper bits.
#[inline(always)]
pub(crate) fn high(x: u64, cluster_bits: u32) -> u64 {
    x >> cluster_bits
}

/// Offset of `x` inside its cluster: its lower bits.
#[inline(always)]
pub(crate) fn low(x: u64, cluster_bits: u32) -> u64 {
    x & ((1u64 << cluster_bits) - 1)
}

/// Reassemble a value from a cluster number and an offset.
#[inline(always)]
pub(crate) fn index(high: u64, low: u64, cluster_bits: u32) -> u64 {
    (high << cluster_bits) | low
}
