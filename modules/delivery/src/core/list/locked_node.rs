use lockline_utils_rs::core::{sync::ArcShared, time::TimerInstant};

use crate::core::{
  consumer::SubConsumerId, identity::MessageHandle, list::node_index::NodeIndex, message::MessageWrapper,
};

/// One record per delivered-but-unresolved message.
///
/// Owned exclusively by the list; all timing fields use [`TimerInstant::NONE`]
/// as the "no deadline" sentinel.
pub(crate) struct LockedNode<M: MessageWrapper> {
  pub(crate) handle:              MessageHandle,
  pub(crate) message:             Option<ArcShared<M>>,
  pub(crate) payload:             Option<M::Body>,
  pub(crate) stored:              bool,
  pub(crate) recoverable:         bool,
  pub(crate) lock_expiry_at:      TimerInstant,
  pub(crate) reference_expiry_at: TimerInstant,
  pub(crate) lock_expired:        bool,
  pub(crate) was_read:            bool,
  pub(crate) owner:               Option<SubConsumerId>,
  pub(crate) arrived_at:          TimerInstant,
  pub(crate) prev:                Option<NodeIndex>,
  pub(crate) next:                Option<NodeIndex>,
}

impl<M: MessageWrapper> LockedNode<M> {
  pub(crate) fn new(message: ArcShared<M>, stored: bool, recoverable: bool, arrived_at: TimerInstant) -> Self {
    Self {
      handle: message.handle(),
      message: Some(message),
      payload: None,
      stored,
      recoverable,
      lock_expiry_at: TimerInstant::NONE,
      reference_expiry_at: TimerInstant::NONE,
      lock_expired: false,
      was_read: false,
      owner: None,
      arrived_at,
      prev: None,
      next: None,
    }
  }
}
