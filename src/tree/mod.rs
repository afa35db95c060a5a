//! Universe tree: node structure, recursive algorithms and main API.

mod iter;
mod node;
mod ops;
#[allow(clippy::module_inception)]
mod tree;

pub use iter::{Iter, IterDesc};
pub use node::Node;
pub use tree::UniverseTree;

pub(crate) use tree::universe_bits;
