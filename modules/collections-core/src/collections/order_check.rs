
use super::{Collection, CollectionOrderError};

/// Checks that `collection` holds exactly `expected`, in iteration order.
///
/// # Errors
///
/// Returns [`CollectionOrderError::LengthMismatch`] when the sizes differ, or
/// [`CollectionOrderError::ElementMismatch`] with the first differing position.
pub fn verify_order<T, C>(expected: &[T], collection: &C) -> Result<(), CollectionOrderError>
where
  T: PartialEq,
  C: Collection<T>, {
  let actual = collection.len();
  if actual != expected.len() {
    return Err(CollectionOrderError::LengthMismatch { expected: expected.len(), actual });
  }

  for (position, (want, got)) in expected.iter().zip(collection.iter()).enumerate() {
    if want != got {
      return Err(CollectionOrderError::ElementMismatch { position });
    }
  }
  Ok(())
}
