//! Linear collections and the capability traits they share.

mod collection;
#[cfg(any(test, feature = "test-support"))]
mod collection_order_error;
mod filterable;
#[cfg(any(test, feature = "test-support"))]
mod order_check;
pub mod queue;
pub mod stack;
#[cfg(test)]
mod tests;

pub use collection::Collection;
#[cfg(any(test, feature = "test-support"))]
pub use collection_order_error::CollectionOrderError;
pub use filterable::Filterable;
#[cfg(any(test, feature = "test-support"))]
pub use order_check::verify_order;
pub use queue::{Queue, QueueIntoIter, QueueIter};
pub use stack::Stack;
