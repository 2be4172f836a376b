use core::fmt;


/// Reasons a collection failed to match an expected element ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionOrderError {
  /// The collection holds a different number of elements than expected.
  LengthMismatch {
    /// Number of elements the caller expected.
    expected: usize,
    /// Number of elements the collection reported.
    actual:   usize,
  },
  /// The element at `position` differs from the expected one.
  ElementMismatch {
    /// Zero-based position in iteration order.
    position: usize,
  },
}

impl fmt::Display for CollectionOrderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | CollectionOrderError::LengthMismatch { expected, actual } => {
        write!(f, "collection holds {actual} elements but {expected} were expected")
      },
      | CollectionOrderError::ElementMismatch { position } => {
        write!(f, "element at position {position} differs from the expected ordering")
      },
    }
  }
}

impl core::error::Error for CollectionOrderError {}
