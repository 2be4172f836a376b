//! LIFO stack backed by a growable vector.

mod stack_struct;

pub use stack_struct::Stack;

/// `tracing` target used by stack events.
pub(crate) const STACK_TRACE_TARGET: &str = "linear_collections::stack";
