use crate::core::{
  sync::ArcShared,
  timing::{alarm_handle::AlarmHandle, alarm_listener::AlarmListener, timer_deadline::TimerDeadline},
};

/// One-shot alarm scheduling service.
///
/// Implementations fire each listener at most once after the deadline elapses.
/// A handle cancelled after the fire has been dispatched may still observe the
/// callback; the listener is responsible for re-validating its own state.
pub trait AlarmService: Send + Sync + 'static {
  /// Arms a one-shot alarm and returns its cancellation handle.
  ///
  /// Arming never invokes the listener on the calling thread; callers may hold
  /// locks the listener will need.
  fn arm(&self, deadline: TimerDeadline, listener: ArcShared<dyn AlarmListener>) -> AlarmHandle;
}
