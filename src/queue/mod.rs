//! Min-queues: configuration, single-owner queue and synchronized queue.

mod config;
#[allow(clippy::module_inception)]
mod queue;
mod sync;

pub use config::QueueConfig;
pub use queue::{MinQueue, OrderedMinQueue};
pub use sync::SyncMinQueue;
