use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};

use super::{monotonic_clock::MonotonicClock, timer_instant::TimerInstant};

#[cfg(test)]
mod tests;

/// A hand-driven clock for deterministic tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
  millis: AtomicU64,
}

impl ManualClock {
  /// Creates a clock positioned at one millisecond past the epoch, keeping the
  /// zero sentinel unreachable.
  #[must_use]
  pub const fn new() -> Self {
    Self { millis: AtomicU64::new(1) }
  }

  /// Advances the clock by the given duration.
  pub fn advance(&self, delta: Duration) {
    self.millis.fetch_add(delta.as_millis() as u64, Ordering::SeqCst);
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for ManualClock {
  fn now(&self) -> TimerInstant {
    TimerInstant::from_millis(self.millis.load(Ordering::SeqCst))
  }
}
