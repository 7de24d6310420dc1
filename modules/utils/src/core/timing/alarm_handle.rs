use portable_atomic::{AtomicBool, Ordering};

use crate::core::sync::ArcShared;


/// Cancellation handle for an armed one-shot alarm.
///
/// Cloning shares the underlying flag, so the service and the caller observe
/// the same cancellation state.
#[derive(Clone, Debug)]
pub struct AlarmHandle {
  cancelled: ArcShared<AtomicBool>,
}

impl AlarmHandle {
  /// Creates a live (not yet cancelled) handle.
  #[must_use]
  pub fn new() -> Self {
    Self { cancelled: ArcShared::new(AtomicBool::new(false)) }
  }

  /// Requests cancellation. Best-effort: an alarm already firing is not recalled.
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::SeqCst);
  }

  /// Returns `true` once cancellation has been requested.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::SeqCst)
  }
}

impl Default for AlarmHandle {
  fn default() -> Self {
    Self::new()
  }
}
