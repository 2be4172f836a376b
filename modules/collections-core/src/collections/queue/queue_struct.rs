use core::{fmt, marker::PhantomData, ptr::NonNull};

use tracing::trace;

use super::{
  QUEUE_TRACE_TARGET, QueueIntoIter, QueueIter,
  queue_node::{NodeLink, QueueNode},
};
use crate::collections::{Collection, Filterable};

/// FIFO queue that stores its elements in a singly-linked chain of nodes.
///
/// Elements are appended at the tail and taken from the head, both in O(1). Searching, removal and
/// filtering walk the chain in O(n). Memory use is always proportional to the number of stored
/// elements.
pub struct Queue<T> {
  head:  NodeLink<T>,
  tail:  NodeLink<T>,
  len:   usize,
  _owns: PhantomData<QueueNode<T>>,
}

impl<T> Queue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: None, len: 0, _owns: PhantomData }
  }

  /// Appends a single value at the tail.
  pub fn push(&mut self, value: T) {
    let link = QueueNode::allocate(value);
    match self.tail {
      // SAFETY: the tail node is owned by this queue and has no successor yet.
      | Some(mut tail) => unsafe { tail.as_mut().next = Some(link) },
      | None => self.head = Some(link),
    }
    self.tail = Some(link);
    self.len += 1;
  }

  /// Appends every value at the tail, in iteration order.
  pub fn add<I>(&mut self, values: I)
  where
    I: IntoIterator<Item = T>, {
    for value in values {
      self.push(value);
    }
  }

  /// Removes and returns the head value, or `None` when the queue is empty.
  pub fn take(&mut self) -> Option<T> {
    let head = self.head?;
    // SAFETY: the head link is owned by this queue and is detached right below.
    let node = unsafe { QueueNode::reclaim(head) };
    self.head = node.next;
    if self.head.is_none() {
      self.tail = None;
    }
    self.len -= 1;
    Some(node.value)
  }

  /// Returns a reference to the head value without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    // SAFETY: the head node is alive for as long as `self` is borrowed.
    self.head.map(|head| unsafe { &(*head.as_ptr()).value })
  }

  /// Returns `true` when any element equals `value`.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq, {
    self.iter().any(|candidate| candidate == value)
  }

  /// Removes every element and frees all nodes.
  pub fn clear(&mut self) {
    let released = self.len;
    while self.take().is_some() {}
    if released > 0 {
      trace!(target: QUEUE_TRACE_TARGET, released, "cleared collection");
    }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Iterates from head to tail without removing anything.
  #[must_use]
  pub const fn iter(&self) -> QueueIter<'_, T> {
    QueueIter::new(self.head, self.len)
  }

  /// Removes the first element equal to `value`, scanning from head to tail.
  ///
  /// Returns `true` when an element was removed.
  pub fn remove(&mut self, value: &T) -> bool
  where
    T: PartialEq, {
    let mut predecessor: NodeLink<T> = None;
    let mut cursor = self.head;
    while let Some(current) = cursor {
      // SAFETY: every node reachable from head is alive and owned by this queue.
      let node = unsafe { current.as_ref() };
      if node.value == *value {
        drop(self.unlink(predecessor, current));
        trace!(target: QUEUE_TRACE_TARGET, len = self.len, "removed first matching element");
        return true;
      }
      predecessor = cursor;
      cursor = node.next;
    }
    false
  }

  /// Removes every element matching `predicate` and returns how many were removed.
  ///
  /// The successors of the head are scanned first; the head itself is evaluated last. Each element
  /// is passed to the predicate exactly once and survivors keep their order.
  pub fn filter<F>(&mut self, mut predicate: F) -> usize
  where
    F: FnMut(&T) -> bool, {
    let Some(head) = self.head else {
      return 0;
    };
    let before = self.len;

    let mut predecessor = head;
    // SAFETY: `predecessor` is always a live node of this queue; it is never the unlinked one.
    while let Some(current) = unsafe { predecessor.as_ref().next } {
      // SAFETY: `current` is the live successor of `predecessor`.
      let matched = predicate(unsafe { &current.as_ref().value });
      if matched {
        drop(self.unlink(Some(predecessor), current));
      } else {
        predecessor = current;
      }
    }

    // SAFETY: the head was not touched by the scan above, which only unlinks successors.
    if predicate(unsafe { &head.as_ref().value }) {
      drop(self.unlink(None, head));
    }

    let removed = before - self.len;
    if removed > 0 {
      trace!(target: QUEUE_TRACE_TARGET, removed, len = self.len, "filtered elements");
    }
    removed
  }

  /// Detaches `current` from the chain and returns its value.
  ///
  /// `predecessor` is `None` when `current` is the head.
  fn unlink(&mut self, predecessor: NodeLink<T>, current: NonNull<QueueNode<T>>) -> T {
    // SAFETY: `current` belongs to this queue and is detached from its only owner below.
    let node = unsafe { QueueNode::reclaim(current) };
    match predecessor {
      // SAFETY: the predecessor is a live node whose successor is `current`.
      | Some(mut predecessor) => unsafe { predecessor.as_mut().next = node.next },
      | None => self.head = node.next,
    }
    if node.next.is_none() {
      self.tail = predecessor;
    }
    self.len -= 1;
    node.value
  }
}

impl<T> Drop for Queue<T> {
  fn drop(&mut self) {
    while self.take().is_some() {}
  }
}

impl<T> Default for Queue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for Queue<T> {
  fn clone(&self) -> Self {
    self.iter().cloned().collect()
  }
}

impl<T: PartialEq> PartialEq for Queue<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, value) in self.iter().enumerate() {
      if index > 0 {
        f.write_str(" -> ")?;
      }
      write!(f, "{value}")?;
    }
    Ok(())
  }
}

impl<T> Extend<T> for Queue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.add(iter);
  }
}

impl<T> FromIterator<T> for Queue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.add(iter);
    queue
  }
}

impl<T> IntoIterator for Queue<T> {
  type IntoIter = QueueIntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    QueueIntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
  type IntoIter = QueueIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> Collection<T> for Queue<T> {
  type Iter<'a>
    = QueueIter<'a, T>
  where
    Self: 'a,
    T: 'a;

  fn add<I>(&mut self, values: I)
  where
    I: IntoIterator<Item = T>, {
    Queue::add(self, values);
  }

  fn take(&mut self) -> Option<T> {
    Queue::take(self)
  }

  fn contains(&self, value: &T) -> bool
  where
    T: PartialEq, {
    Queue::contains(self, value)
  }

  fn clear(&mut self) {
    Queue::clear(self);
  }

  fn len(&self) -> usize {
    Queue::len(self)
  }

  fn is_empty(&self) -> bool {
    Queue::is_empty(self)
  }

  fn iter(&self) -> Self::Iter<'_> {
    Queue::iter(self)
  }
}

impl<T> Filterable<T> for Queue<T> {
  fn remove(&mut self, value: &T) -> bool
  where
    T: PartialEq, {
    Queue::remove(self, value)
  }

  fn filter<F>(&mut self, predicate: F) -> usize
  where
    F: FnMut(&T) -> bool, {
    Queue::filter(self, predicate)
  }
}

// SAFETY: the queue exclusively owns its nodes, like `Box<T>` chains do.
unsafe impl<T: Send> Send for Queue<T> {}

// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Queue<T> {}
