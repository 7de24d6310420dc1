use super::timer_instant::TimerInstant;

/// Monotonic clock abstraction shared across runtimes.
pub trait MonotonicClock: Send + Sync + 'static {
  /// Returns the latest monotonic instant. Never returns [`TimerInstant::NONE`].
  fn now(&self) -> TimerInstant;
}
