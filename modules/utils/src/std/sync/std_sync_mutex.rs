extern crate std;

use std::sync::{Mutex, MutexGuard};

use crate::core::sync::SyncMutexLike;


/// Wrapper around [`std::sync::Mutex`] implementing [`SyncMutexLike`].
///
/// Poisoning is collapsed into the inner value: a panic while holding the
/// guard does not make the data permanently unreachable.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    match self.0.into_inner() {
      | Ok(value) => value,
      | Err(poisoned) => poisoned.into_inner(),
    }
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> MutexGuard<'_, T> {
    match self.0.lock() {
      | Ok(guard) => guard,
      | Err(poisoned) => poisoned.into_inner(),
    }
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}
