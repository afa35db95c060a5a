//! Thread-safe min-queue with blocking dequeue.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::debug;

use crate::error::{Error, Result};
use crate::key::UniverseKey;
use crate::min_set::MinSet;
use crate::queue::{MinQueue, QueueConfig};
use crate::tree::UniverseTree;

struct State<K: UniverseKey, S: MinSet<K>> {
    queue: MinQueue<K, S>,
    closed: bool,
}

impl<K: UniverseKey, S: MinSet<K>> State<K, S> {
    /// Whether a dequeuer has to keep waiting.
    #[inline]
    fn starved(&self) -> bool {
        self.queue.is_empty() && !self.closed
    }
}

/// [`MinQueue`] shared between threads.
///
/// One mutex covers the FIFO, the multiplicity counter and the set
/// together, so every enqueue and dequeue is applied as a unit. Dequeuers
/// that find the queue empty can wait on a condition variable, with or
/// without a timeout.
///
/// # Closing
/// [`close`](Self::close) wakes every waiter. Afterwards enqueues fail with
/// `Closed`; dequeues still drain what is left, then fail with `Closed`
/// instead of blocking.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use veb_min_queue::SyncMinQueue;
///
/// let queue = Arc::new(SyncMinQueue::<u32>::new(1 << 10).unwrap());
/// let producer = {
///     let queue = Arc::clone(&queue);
///     thread::spawn(move || queue.enqueue(42).unwrap())
/// };
///
/// assert_eq!(queue.dequeue(), Ok(42));
/// producer.join().unwrap();
/// ```
pub struct SyncMinQueue<K: UniverseKey = u64, S: MinSet<K> = UniverseTree<K>> {
    state: Mutex<State<K, S>>,
    available: Condvar,
}

impl<K: UniverseKey> SyncMinQueue<K> {
    /// Create an empty queue accepting values in `[0, universe)`.
    pub fn new(universe: u64) -> Result<Self> {
        MinQueue::new(universe).map(Self::from_queue)
    }

    /// Create an empty queue from a configuration.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        MinQueue::with_config(config).map(Self::from_queue)
    }
}

impl<K: UniverseKey> SyncMinQueue<K, BTreeSet<K>> {
    /// Create an empty queue backed by a `BTreeSet`.
    pub fn ordered() -> Self {
        Self::from_queue(MinQueue::ordered())
    }
}

impl<K: UniverseKey, S: MinSet<K>> SyncMinQueue<K, S> {
    /// Wrap an existing queue, keeping its contents.
    pub fn from_queue(queue: MinQueue<K, S>) -> Self {
        Self {
            state: Mutex::new(State {
                queue,
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Every critical section restores the invariants before it can
    /// panic, so a poisoned lock still guards a consistent queue.
    fn lock(&self) -> MutexGuard<'_, State<K, S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `value` and wake one waiting dequeuer.
    ///
    /// # Errors
    /// `Closed` after [`close`](Self::close); `OutOfRange` as for
    /// [`MinQueue::enqueue`].
    pub fn enqueue(&self, value: K) -> Result<()> {
        let mut state = self.lock();
        if state.closed {
            return Err(Error::Closed);
        }
        state.queue.enqueue(value)?;
        drop(state);

        self.available.notify_one();
        Ok(())
    }

    /// Remove the front value without blocking.
    ///
    /// # Errors
    /// `Empty` if there is nothing to dequeue.
    pub fn try_dequeue(&self) -> Result<K> {
        self.lock().queue.dequeue()
    }

    /// Remove the front value, blocking until one is available.
    ///
    /// # Errors
    /// `Closed` if the queue is closed and drained.
    pub fn dequeue(&self) -> Result<K> {
        let state = self.lock();
        let mut state = self
            .available
            .wait_while(state, |state| state.starved())
            .unwrap_or_else(PoisonError::into_inner);

        Self::take(&mut state)
    }

    /// Remove the front value, blocking for at most `timeout`.
    ///
    /// A wait that times out leaves the queue untouched.
    ///
    /// # Errors
    /// `Empty` if `timeout` elapses first; `Closed` if the queue is closed
    /// and drained.
    pub fn dequeue_timeout(&self, timeout: Duration) -> Result<K> {
        let state = self.lock();
        let (mut state, _) = self
            .available
            .wait_timeout_while(state, timeout, |state| state.starved())
            .unwrap_or_else(PoisonError::into_inner);

        Self::take(&mut state)
    }

    fn take(state: &mut State<K, S>) -> Result<K> {
        match state.queue.dequeue() {
            Err(Error::Empty) if state.closed => Err(Error::Closed),
            result => result,
        }
    }

    /// Smallest value currently enqueued. Never blocks.
    pub fn find_min(&self) -> Result<K> {
        self.lock().queue.find_min()
    }

    /// Largest value currently enqueued. Never blocks.
    pub fn find_max(&self) -> Result<K> {
        self.lock().queue.find_max()
    }

    /// Number of enqueued values, duplicates included.
    pub fn size(&self) -> usize {
        self.lock().queue.size()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// Refuse further enqueues and wake every blocked dequeuer.
    pub fn close(&self) {
        let mut state = self.lock();
        if !state.closed {
            state.closed = true;
            debug!("min-queue closed with {} values left", state.queue.size());
        }
        drop(state);

        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Unwrap the inner queue.
    pub fn into_inner(self) -> MinQueue<K, S> {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .queue
    }
}

impl<K, S> fmt::Debug for SyncMinQueue<K, S>
where
    K: UniverseKey,
    S: MinSet<K> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("SyncMinQueue")
            .field("queue", &state.queue)
            .field("closed", &state.closed)
            .finish()
    }
}

impl<K: UniverseKey, S: MinSet<K>> From<MinQueue<K, S>> for SyncMinQueue<K, S> {
    fn from(queue: MinQueue<K, S>) -> Self {
        Self::from_queue(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_try_dequeue_empty() {
        let queue = SyncMinQueue::<u32>::new(64).unwrap();

        assert_eq!(queue.try_dequeue(), Err(Error::Empty));
        assert_eq!(queue.try_dequeue(), Err(Error::Empty));
        assert_eq!(queue.find_min(), Err(Error::Empty));
    }

    #[test]
    fn test_basic_operations() {
        let queue = SyncMinQueue::<u32>::new(64).unwrap();
        for value in [9, 4, 6] {
            queue.enqueue(value).unwrap();
        }

        assert_eq!(queue.size(), 3);
        assert_eq!(queue.find_min(), Ok(4));
        assert_eq!(queue.find_max(), Ok(9));
        assert_eq!(queue.dequeue(), Ok(9));
        assert_eq!(queue.try_dequeue(), Ok(4));
        assert_eq!(queue.find_min(), Ok(6));
        assert_eq!(
            queue.enqueue(64),
            Err(Error::OutOfRange {
                value: 64,
                universe: 64
            })
        );
    }

    #[test]
    fn test_dequeue_blocks_until_enqueue() {
        let queue = Arc::new(SyncMinQueue::<u32>::new(1 << 10).unwrap());

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.dequeue())
        };

        thread::sleep(Duration::from_millis(50));
        queue.enqueue(7).unwrap();

        assert_eq!(consumer.join().unwrap(), Ok(7));
        assert!(queue.is_empty());
        assert_eq!(queue.find_min(), Err(Error::Empty));
    }

    #[test]
    fn test_dequeue_timeout_leaves_queue_untouched() {
        let queue = SyncMinQueue::<u32>::new(64).unwrap();

        let start = Instant::now();
        assert_eq!(
            queue.dequeue_timeout(Duration::from_millis(30)),
            Err(Error::Empty)
        );
        assert!(start.elapsed() >= Duration::from_millis(30));

        queue.enqueue(5).unwrap();
        assert_eq!(queue.dequeue_timeout(Duration::from_millis(30)), Ok(5));
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_close_wakes_waiters() {
        let queue = Arc::new(SyncMinQueue::<u32>::new(64).unwrap());

        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.dequeue())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        queue.close();

        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), Err(Error::Closed));
        }
        assert!(queue.is_closed());
    }

    #[test]
    fn test_close_drains_remaining() {
        let queue = SyncMinQueue::<u32>::new(64).unwrap();
        queue.enqueue(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.close();

        assert_eq!(queue.enqueue(2), Err(Error::Closed));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.find_min(), Ok(1));
        assert_eq!(queue.dequeue_timeout(Duration::from_secs(5)), Ok(1));
        assert_eq!(queue.dequeue(), Err(Error::Closed));
        assert_eq!(
            queue.dequeue_timeout(Duration::from_secs(5)),
            Err(Error::Closed)
        );
        assert_eq!(queue.try_dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_concurrent_producers_consumers() {
        const PRODUCERS: u32 = 4;
        const PER_PRODUCER: u32 = 500;

        let queue = Arc::new(SyncMinQueue::<u32>::new(1 << 12).unwrap());

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|p| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..PER_PRODUCER {
                        queue.enqueue(p * PER_PRODUCER + i).unwrap();
                    }
                })
            })
            .collect();

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut seen = Vec::new();
                for _ in 0..PRODUCERS * PER_PRODUCER {
                    seen.push(queue.dequeue().unwrap());
                }
                seen
            })
        };

        for producer in producers {
            producer.join().unwrap();
        }
        let mut seen = consumer.join().unwrap();
        seen.sort_unstable();

        assert_eq!(seen, (0..PRODUCERS * PER_PRODUCER).collect::<Vec<_>>());
        assert_eq!(queue.find_min(), Err(Error::Empty));
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_debug_shows_queue_and_flag() {
        let queue = SyncMinQueue::<u32>::new(64).unwrap();
        queue.enqueue(5).unwrap();
        queue.close();

        let rendered = format!("{queue:?}");
        assert!(rendered.starts_with("SyncMinQueue"));
        assert!(rendered.contains("closed: true"));
        assert!(rendered.contains("fifo: [5]"));
    }

    #[test]
    fn test_ordered_and_into_inner() {
        let queue = SyncMinQueue::<u64, BTreeSet<u64>>::ordered();
        queue.enqueue(u64::MAX).unwrap();
        queue.enqueue(12).unwrap();

        let inner = queue.into_inner();
        assert_eq!(inner.find_min(), Ok(12));
        assert_eq!(inner.size(), 2);

        let queue = SyncMinQueue::from(inner);
        assert_eq!(queue.dequeue(), Ok(u64::MAX));
    }
}
