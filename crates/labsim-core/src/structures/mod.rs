//! Abstract data structure simulators.
//!
//! These model the structures the games teach, independent of any
//! rendering: a strict LIFO stack, a strict FIFO queue, and an editable
//! graph with adjacency views.

mod graph;
mod queue;
mod stack;

pub use graph::{GraphError, GraphModel, Neighbor};
pub use queue::Queue;
pub use stack::Stack;

use thiserror::Error;

/// Signalled by pop/dequeue/peek on an empty structure. Always recovered
/// at the call site and shown as a message; the structure is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the {0} is empty")]
pub struct EmptyError(pub &'static str);
