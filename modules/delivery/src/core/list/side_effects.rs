use alloc::vec::Vec;

use lockline_utils_rs::core::sync::ArcShared;

use crate::core::{identity::MessageHandle, message::MessageWrapper};

/// Store and consumer work queued inside a critical section.
///
/// Every mutating operation fills one of these while holding the list mutex
/// and executes it strictly after the guard is dropped; this is how the lock
/// hierarchy (session above list, store and consumer never called under the
/// list mutex) stays intact.
pub(crate) struct SideEffects<M: MessageWrapper> {
  /// Messages to unlock in the store.
  pub(crate) unlocks:      Vec<ArcShared<M>>,
  /// Messages to remove from the store, with the per-message decrement flag.
  pub(crate) removes:      Vec<(ArcShared<M>, bool)>,
  /// Messages whose cached body should be released.
  pub(crate) releases:     Vec<ArcShared<M>>,
  /// Delivery slots to hand back to the consumer in one call.
  pub(crate) active_delta: usize,
  /// Handles found to be no longer locked, aggregated into one error.
  pub(crate) not_locked:   Vec<MessageHandle>,
}

impl<M: MessageWrapper> SideEffects<M> {
  pub(crate) const fn new() -> Self {
    Self {
      unlocks:      Vec::new(),
      removes:      Vec::new(),
      releases:     Vec::new(),
      active_delta: 0,
      not_locked:   Vec::new(),
    }
  }
}
