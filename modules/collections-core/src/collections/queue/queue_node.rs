use alloc::boxed::Box;
use core::ptr::NonNull;

/// Link to a heap-allocated queue node.
pub(crate) type NodeLink<T> = Option<NonNull<QueueNode<T>>>;

/// Single link of the queue chain. Each node is owned by its predecessor, or by the queue when it
/// is the head.
pub(crate) struct QueueNode<T> {
  pub(crate) value: T,
  pub(crate) next:  NodeLink<T>,
}

impl<T> QueueNode<T> {
  /// Allocates a detached node and leaks it into a raw link.
  pub(crate) fn allocate(value: T) -> NonNull<Self> {
    NonNull::from(Box::leak(Box::new(Self { value, next: None })))
  }

  /// Reclaims ownership of a node previously produced by [`QueueNode::allocate`].
  ///
  /// # Safety
  ///
  /// `link` must come from [`QueueNode::allocate`], must not have been reclaimed already, and no
  /// other reference to the node may be used afterwards.
  pub(crate) unsafe fn reclaim(link: NonNull<Self>) -> Box<Self> {
    // SAFETY: the caller guarantees the pointer came from `Box::leak` and is reclaimed once.
    unsafe { Box::from_raw(link.as_ptr()) }
  }
}
