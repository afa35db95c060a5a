//! Index-addressed arena storage for tree nodes.

#[allow(clippy::module_inception)]
mod arena;
mod free_list;

pub use arena::NodeArena;
