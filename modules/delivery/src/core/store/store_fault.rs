use alloc::string::String;
use core::fmt;

use crate::core::identity::MessageHandle;


/// Failure reported by the backing store or a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreFault {
  /// The store no longer holds a lock for the message, typically because it
  /// was removed externally. Expected in normal operation and non-fatal.
  NotLocked(MessageHandle),
  /// The owning session died underneath the store call.
  SessionDropped,
  /// Any other store or transaction failure.
  Backend(String),
}

impl StoreFault {
  /// Creates a not-locked fault for the given handle.
  #[must_use]
  pub const fn not_locked(handle: MessageHandle) -> Self {
    Self::NotLocked(handle)
  }

  /// Creates a backend fault with the given description.
  #[must_use]
  pub fn backend(reason: impl Into<String>) -> Self {
    Self::Backend(reason.into())
  }

  /// Returns the handle when this is a not-locked fault.
  #[must_use]
  pub const fn as_not_locked(&self) -> Option<MessageHandle> {
    match self {
      | Self::NotLocked(handle) => Some(*handle),
      | _ => None,
    }
  }
}

impl fmt::Display for StoreFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NotLocked(handle) => write!(f, "message {handle} is not locked in the store"),
      | Self::SessionDropped => write!(f, "session dropped during a store operation"),
      | Self::Backend(reason) => write!(f, "store failure: {reason}"),
    }
  }
}
