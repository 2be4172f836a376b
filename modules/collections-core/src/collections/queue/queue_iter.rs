use core::{iter::FusedIterator, marker::PhantomData};

use super::queue_node::{NodeLink, QueueNode};

/// Borrowing iterator over a [`Queue`](super::Queue), yielding elements from head to tail.
pub struct QueueIter<'a, T> {
  next:      NodeLink<T>,
  remaining: usize,
  _marker:   PhantomData<&'a QueueNode<T>>,
}

impl<'a, T> QueueIter<'a, T> {
  pub(crate) const fn new(head: NodeLink<T>, len: usize) -> Self {
    Self { next: head, remaining: len, _marker: PhantomData }
  }
}

impl<'a, T> Iterator for QueueIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let link = self.next?;
    // SAFETY: the iterator borrows the queue for `'a`, so every reachable node stays alive and
    // unmodified for that lifetime.
    let node = unsafe { &*link.as_ptr() };
    self.next = node.next;
    self.remaining -= 1;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

impl<T> FusedIterator for QueueIter<'_, T> {}

impl<T> Clone for QueueIter<'_, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, remaining: self.remaining, _marker: PhantomData }
  }
}

// SAFETY: the iterator only hands out shared references to `T`.
unsafe impl<T: Sync> Send for QueueIter<'_, T> {}

// SAFETY: the iterator only hands out shared references to `T`.
unsafe impl<T: Sync> Sync for QueueIter<'_, T> {}
