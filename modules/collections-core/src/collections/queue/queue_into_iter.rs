use core::iter::FusedIterator;

use super::Queue;

/// Owning iterator that drains a [`Queue`] from head to tail.
pub struct QueueIntoIter<T> {
  queue: Queue<T>,
}

impl<T> QueueIntoIter<T> {
  pub(crate) const fn new(queue: Queue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for QueueIntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.take()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.queue.len();
    (len, Some(len))
  }
}

impl<T> ExactSizeIterator for QueueIntoIter<T> {}

impl<T> FusedIterator for QueueIntoIter<T> {}
