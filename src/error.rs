//! Error type shared by the universe tree and the queues.

use thiserror::Error;

/// Errors surfaced by tree and queue operations.
///
/// All of them report caller misuse or an empty structure; none are
/// retried internally and none leave a partial mutation behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Value lies outside `[0, universe)`.
    #[error("value {value} is outside the universe [0, {universe})")]
    OutOfRange { value: u64, universe: u64 },

    /// Dequeue or find-min on a queue with no elements, or a timed
    /// dequeue that elapsed before an element arrived.
    #[error("queue is empty")]
    Empty,

    /// Requested universe is not a power of two, is below 2, or is wider
    /// than the tree (or its key type) can address.
    #[error("unsupported universe size {requested}")]
    UniverseExhausted { requested: u64 },

    /// The synchronized queue was closed.
    #[error("queue is closed")]
    Closed,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::OutOfRange {
            value: 40,
            universe: 32,
        };
        assert_eq!(err.to_string(), "value 40 is outside the universe [0, 32)");
        assert_eq!(Error::Empty.to_string(), "queue is empty");
        assert_eq!(
            Error::UniverseExhausted { requested: 3 }.to_string(),
            "unsupported universe size 3"
        );
    }
}
