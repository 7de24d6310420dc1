/// Callback invoked when a one-shot alarm fires.
///
/// Cancellation is best-effort: a cancelled alarm may still pop, so listeners
/// must re-validate that any work they guard is actually due.
pub trait AlarmListener: Send + Sync + 'static {
  /// Called on the alarm service's worker context when the deadline elapses.
  fn alarm(&self);
}
