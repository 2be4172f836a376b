/// Common operations shared by linear single-value containers.
///
/// Implementors define an insertion end and an extraction end: a FIFO container takes from the end
/// opposite to the one it adds to, a LIFO container takes from the same end.
pub trait Collection<T> {
  /// Borrowing iterator over the stored elements.
  type Iter<'a>: Iterator<Item = &'a T>
  where
    Self: 'a,
    T: 'a;

  /// Appends the values at the insertion end, preserving their order.
  ///
  /// An empty iterator leaves the collection untouched.
  fn add<I>(&mut self, values: I)
  where
    I: IntoIterator<Item = T>;

  /// Removes and returns the next element in extraction order.
  ///
  /// Returns `None` when the collection is empty.
  fn take(&mut self) -> Option<T>;

  /// Returns `true` when any stored element equals `value`.
  fn contains(&self, value: &T) -> bool
  where
    T: PartialEq;

  /// Removes every element and releases the backing storage.
  fn clear(&mut self);

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns `true` when the collection holds no elements.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Iterates over the stored elements without removing them.
  ///
  /// The iterator borrows the collection, so it cannot be mutated while iteration is in progress.
  fn iter(&self) -> Self::Iter<'_>;
}
