use core::fmt;

use crate::core::identity::origin_id::OriginId;

#[cfg(test)]
mod tests;

/// Unique handle of a message within a delivery list.
///
/// Combines the originating node with the per-origin message value; two
/// handles are equal exactly when they name the same message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageHandle {
  origin: OriginId,
  value:  u64,
}

impl MessageHandle {
  /// Creates a handle from its origin and message value.
  #[must_use]
  #[inline]
  pub const fn new(origin: OriginId, value: u64) -> Self {
    Self { origin, value }
  }

  /// Retrieves the originating node identifier.
  #[must_use]
  #[inline]
  pub const fn origin(&self) -> OriginId {
    self.origin
  }

  /// Retrieves the per-origin message value.
  #[must_use]
  #[inline]
  pub const fn value(&self) -> u64 {
    self.value
  }
}

impl fmt::Display for MessageHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.origin, self.value)
  }
}
