use core::time::Duration;

#[cfg(test)]
mod tests;

/// A point on a monotonic timeline, measured in whole milliseconds.
///
/// The zero instant doubles as the "no deadline" sentinel throughout the
/// workspace, so clocks must never report it for a real reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerInstant(u64);

impl TimerInstant {
  /// The sentinel instant meaning "no deadline recorded".
  pub const NONE: Self = Self(0);

  /// Creates an instant from raw milliseconds.
  #[must_use]
  #[inline]
  pub const fn from_millis(millis: u64) -> Self {
    Self(millis)
  }

  /// Retrieves the raw millisecond value.
  #[must_use]
  #[inline]
  pub const fn as_millis(self) -> u64 {
    self.0
  }

  /// Returns `true` when this is the "no deadline" sentinel.
  #[must_use]
  #[inline]
  pub const fn is_none(self) -> bool {
    self.0 == 0
  }

  /// Returns the instant advanced by the given duration, saturating on overflow.
  #[must_use]
  pub const fn saturating_add(self, delta: Duration) -> Self {
    Self(self.0.saturating_add(delta.as_millis() as u64))
  }

  /// Returns the duration remaining until `later`, or zero if it has passed.
  #[must_use]
  pub const fn remaining_until(self, later: Self) -> Duration {
    Duration::from_millis(later.0.saturating_sub(self.0))
  }
}
