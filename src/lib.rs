//! # veb-min-queue
//!
//! FIFO queue of bounded integers that reports the minimum of its current
//! contents in O(1).
//!
//! ## Features
//! - `UniverseTree`: Van Emde Boas style set over `[0, 2^k)` with
//!   O(log log U) insert, remove, contains, successor, predecessor and O(1)
//!   min/max
//! - `MinQueue`: FIFO + multiplicity counter + `MinSet`, duplicates allowed
//! - `OrderedMinQueue`: same contract over a `BTreeSet` (O(log n))
//! - `SyncMinQueue`: one lock over the whole queue, blocking and timed dequeue
//!
//! ## Example
//! ```rust
//! use veb_min_queue::{Error, MinQueue};
//!
//! let mut queue = MinQueue::<u32>::new(1 << 15)?;
//! for value in [3, 6, 7, 1, 12] {
//!     queue.enqueue(value)?;
//! }
//! assert_eq!(queue.find_min()?, 1);
//! assert_eq!(queue.dequeue()?, 3);
//! assert_eq!(
//!     queue.enqueue(1 << 15),
//!     Err(Error::OutOfRange { value: 1 << 15, universe: 1 << 15 })
//! );
//! # Ok::<(), Error>(())
//! ```

mod arena;
mod constants;
mod counter;
mod error;
mod key;
mod min_set;
mod queue;
mod tree;

pub use constants::{DEFAULT_UNIVERSE, MAX_UNIVERSE_BITS};
pub use counter::Multiplicity;
pub use error::{Error, Result};
pub use key::UniverseKey;
pub use min_set::MinSet;
pub use queue::{MinQueue, OrderedMinQueue, QueueConfig, SyncMinQueue};
pub use tree::{Iter, IterDesc, UniverseTree};
