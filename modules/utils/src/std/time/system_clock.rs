extern crate std;

use std::time::Instant;

use crate::core::time::{MonotonicClock, TimerInstant};

#[cfg(test)]
mod tests;

/// Monotonic clock backed by [`std::time::Instant`].
#[derive(Debug)]
pub struct SystemClock {
  origin: Instant,
}

impl SystemClock {
  /// Creates a clock anchored at the moment of construction.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Default for SystemClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for SystemClock {
  fn now(&self) -> TimerInstant {
    // +1 keeps the zero "no deadline" sentinel unreachable.
    TimerInstant::from_millis(self.origin.elapsed().as_millis() as u64 + 1)
  }
}
