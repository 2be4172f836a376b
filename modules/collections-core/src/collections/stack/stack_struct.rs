use alloc::vec::Vec;
use core::{fmt, slice};

use tracing::trace;

use super::STACK_TRACE_TARGET;
use crate::collections::{Collection, Filterable};

/// LIFO stack that stores its elements in a vector, bottom first.
///
/// Pushes and pops happen at the end of the vector in amortised O(1). Searching, removal and
/// filtering are O(n). The stack grows on demand and has no capacity limit.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
  pile: Vec<T>,
}

impl<T> Stack<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { pile: Vec::new() }
  }

  /// Creates an empty stack with room for `capacity` elements before reallocating.
  ///
  /// The capacity is a preallocation hint only; the stack still grows past it.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { pile: Vec::with_capacity(capacity) }
  }

  /// Pushes a single value on top.
  pub fn push(&mut self, value: T) {
    self.pile.push(value);
  }

  /// Pushes every value on top, in iteration order, so the last value ends up on top.
  pub fn add<I>(&mut self, values: I)
  where
    I: IntoIterator<Item = T>, {
    self.pile.extend(values);
  }

  /// Removes and returns the top value, or `None` when the stack is empty.
  pub fn take(&mut self) -> Option<T> {
    self.pile.pop()
  }

  /// Removes and returns the top value. Same as [`Stack::take`].
  pub fn draw(&mut self) -> Option<T> {
    self.take()
  }

  /// Returns a reference to the top value without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.pile.last()
  }

  /// Returns `true` when any element equals `value`.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq, {
    self.pile.contains(value)
  }

  /// Removes every element and releases the backing allocation.
  pub fn clear(&mut self) {
    let released = self.pile.len();
    self.pile = Vec::new();
    if released > 0 {
      trace!(target: STACK_TRACE_TARGET, released, "cleared collection");
    }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.pile.len()
  }

  /// Returns `true` when the stack holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pile.is_empty()
  }

  /// Iterates from bottom to top without removing anything.
  ///
  /// Use `.rev()` on the returned iterator to visit elements in pop order.
  #[must_use]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.pile.iter()
  }

  /// Returns the stored elements, bottom first.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.pile
  }

  /// Removes the element equal to `value` that is closest to the top.
  ///
  /// Returns `true` when an element was removed.
  pub fn remove(&mut self, value: &T) -> bool
  where
    T: PartialEq, {
    let Some(index) = self.pile.iter().rposition(|candidate| candidate == value) else {
      return false;
    };
    drop(self.pile.remove(index));
    trace!(target: STACK_TRACE_TARGET, len = self.pile.len(), "removed first matching element");
    true
  }

  /// Removes every element matching `predicate` and returns how many were removed.
  ///
  /// The predicate is evaluated from top to bottom, once per element; survivors keep their order.
  pub fn filter<F>(&mut self, mut predicate: F) -> usize
  where
    F: FnMut(&T) -> bool, {
    let mut verdicts: Vec<bool> = self.pile.iter().rev().map(&mut predicate).collect();
    let removed = verdicts.iter().filter(|matched| **matched).count();
    if removed == 0 {
      return 0;
    }

    verdicts.reverse();
    let mut verdicts = verdicts.into_iter();
    self.pile.retain(|_| !verdicts.next().unwrap_or(false));
    trace!(target: STACK_TRACE_TARGET, removed, len = self.pile.len(), "filtered elements");
    removed
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.pile.iter()).finish()
  }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (index, value) in self.pile.iter().enumerate() {
      if index > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{value}")?;
    }
    f.write_str("]")
  }
}

impl<T> Extend<T> for Stack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.add(iter);
  }
}

impl<T> FromIterator<T> for Stack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { pile: iter.into_iter().collect() }
  }
}

impl<T> From<Vec<T>> for Stack<T> {
  fn from(pile: Vec<T>) -> Self {
    Self { pile }
  }
}

impl<T> IntoIterator for Stack<T> {
  type IntoIter = alloc::vec::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.pile.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
  type IntoIter = slice::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.pile.iter()
  }
}

impl<T> Collection<T> for Stack<T> {
  type Iter<'a>
    = slice::Iter<'a, T>
  where
    Self: 'a,
    T: 'a;

  fn add<I>(&mut self, values: I)
  where
    I: IntoIterator<Item = T>, {
    Stack::add(self, values);
  }

  fn take(&mut self) -> Option<T> {
    Stack::take(self)
  }

  fn contains(&self, value: &T) -> bool
  where
    T: PartialEq, {
    Stack::contains(self, value)
  }

  fn clear(&mut self) {
    Stack::clear(self);
  }

  fn len(&self) -> usize {
    Stack::len(self)
  }

  fn is_empty(&self) -> bool {
    Stack::is_empty(self)
  }

  fn iter(&self) -> Self::Iter<'_> {
    Stack::iter(self)
  }
}

impl<T> Filterable<T> for Stack<T> {
  fn remove(&mut self, value: &T) -> bool
  where
    T: PartialEq, {
    Stack::remove(self, value)
  }

  fn filter<F>(&mut self, predicate: F) -> usize
  where
    F: FnMut(&T) -> bool, {
    Stack::filter(self, predicate)
  }
}
