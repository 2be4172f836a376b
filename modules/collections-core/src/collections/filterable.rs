/// Predicate- and equality-based removal for linear containers.
pub trait Filterable<T> {
  /// Removes the first element equal to `value`, scanning in the container's extraction order.
  ///
  /// Returns `true` if an element was removed. A miss leaves the container unchanged.
  fn remove(&mut self, value: &T) -> bool
  where
    T: PartialEq;

  /// Removes every element for which `predicate` returns `true` and returns how many were removed.
  ///
  /// Surviving elements keep their relative order. The predicate runs exactly once per element.
  fn filter<F>(&mut self, predicate: F) -> usize
  where
    F: FnMut(&T) -> bool;
}
