//! FIFO queue backed by a singly-linked chain of nodes.

mod queue_into_iter;
mod queue_iter;
mod queue_node;
mod queue_struct;

pub use queue_into_iter::QueueIntoIter;
pub use queue_iter::QueueIter;
pub use queue_struct::Queue;

/// `tracing` target used by queue events.
pub(crate) const QUEUE_TRACE_TARGET: &str = "linear_collections::queue";
