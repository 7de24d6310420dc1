use lockline_utils_rs::core::timing::TimerDeadline;

use crate::core::{identity::MessageHandle, observer::expiry_chain::ExpiryChain, store::StoreFault};

/// Sink for engine events that are not surfaced to callers.
///
/// Every method has a no-op default; implementations override the ones they
/// care about. Callbacks may arrive from timer threads and must not block.
pub trait DeliveryObserver: Send + Sync + 'static {
  /// A sweep expired the lock on a message.
  fn lock_expired(&self, handle: MessageHandle) {
    let _ = handle;
  }

  /// A sweep released the cached body of a message.
  fn reference_expired(&self, handle: MessageHandle) {
    let _ = handle;
  }

  /// An expiry alarm was armed.
  fn alarm_armed(&self, chain: ExpiryChain, deadline: TimerDeadline) {
    let _ = (chain, deadline);
  }

  /// A best-effort store call failed and the failure was swallowed.
  fn store_fault_swallowed(&self, fault: &StoreFault) {
    let _ = fault;
  }
}
