use alloc::vec::Vec;

use lockline_utils_rs::core::{
  sync::{ArcShared, SyncMutexLike},
  time::TimerInstant,
  timing::{AlarmListener, TimerDeadline},
};

use crate::core::{
  env::DeliveryEnv,
  identity::MessageHandle,
  list::{locked_message_list::ListInner, side_effects::SideEffects},
  observer::ExpiryChain,
};

/// Alarm callback expiring message locks.
///
/// Fires are best-effort and self-validating: a stale pop (the tracked
/// deadline moved since arming) expires nothing and simply re-arms for the
/// real deadline.
pub(crate) struct LockExpirySweep<E: DeliveryEnv> {
  pub(crate) inner: ArcShared<ListInner<E>>,
}

impl<E: DeliveryEnv> AlarmListener for LockExpirySweep<E> {
  fn alarm(&self) {
    run_lock_sweep(&self.inner);
  }
}

/// Alarm callback releasing cached message bodies.
///
/// Reference expiry is a memory optimization, not a delivery-state change;
/// the node stays fully usable afterwards.
pub(crate) struct ReferenceExpirySweep<E: DeliveryEnv> {
  pub(crate) inner: ArcShared<ListInner<E>>,
}

impl<E: DeliveryEnv> AlarmListener for ReferenceExpirySweep<E> {
  fn alarm(&self) {
    run_reference_sweep(&self.inner);
  }
}

pub(crate) fn run_lock_sweep<E: DeliveryEnv>(inner: &ArcShared<ListInner<E>>) {
  let now = inner.runtime.clock().now();
  let mut effects = SideEffects::new();
  let mut expired: Vec<MessageHandle> = Vec::new();
  let mut rearm: Option<TimerDeadline> = None;
  {
    let mut state = inner.state.lock();
    loop {
      let Some(index) = state.next_lock_expiry else {
        break;
      };
      let Some(node) = state.node_mut(index) else {
        state.next_lock_expiry = None;
        break;
      };
      if node.lock_expiry_at.is_none() {
        // Lock already satisfied or unlocked; expiry no longer applies.
        let next = node.next;
        state.next_lock_expiry = state.first_lock_expiry_from(next);
        continue;
      }
      if now < node.lock_expiry_at {
        rearm = Some(TimerDeadline::from_duration(now.remaining_until(node.lock_expiry_at)));
        break;
      }
      node.lock_expired = true;
      node.lock_expiry_at = TimerInstant::NONE;
      node.payload = None;
      let was_stored = node.stored;
      node.stored = false;
      let message = node.message.take();
      let next = node.next;
      expired.push(node.handle);
      effects.active_delta += 1;
      if was_stored {
        if let Some(message) = message {
          effects.unlocks.push(message);
        }
      }
      state.next_lock_expiry = state.first_lock_expiry_from(next);
    }
    state.lock_alarm_armed = rearm.is_some();
  }
  for handle in expired {
    inner.runtime.observer().lock_expired(handle);
  }
  if let Some(deadline) = rearm {
    ListInner::arm(inner, ExpiryChain::Lock, deadline);
  }
  // Expired locks bump the redelivery count; faults here have no caller to
  // report to and go to the observer.
  let _ = inner.execute(effects, None, true, true, false);
}

pub(crate) fn run_reference_sweep<E: DeliveryEnv>(inner: &ArcShared<ListInner<E>>) {
  let now = inner.runtime.clock().now();
  let mut effects = SideEffects::new();
  let mut released: Vec<MessageHandle> = Vec::new();
  let mut rearm: Option<TimerDeadline> = None;
  {
    let mut state = inner.state.lock();
    loop {
      let Some(index) = state.next_reference_expiry else {
        break;
      };
      let Some(node) = state.node_mut(index) else {
        state.next_reference_expiry = None;
        break;
      };
      if node.reference_expiry_at.is_none() {
        let next = node.next;
        state.next_reference_expiry = state.first_reference_expiry_from(next);
        continue;
      }
      if now < node.reference_expiry_at {
        rearm = Some(TimerDeadline::from_duration(now.remaining_until(node.reference_expiry_at)));
        break;
      }
      node.reference_expiry_at = TimerInstant::NONE;
      node.payload = None;
      let next = node.next;
      released.push(node.handle);
      if let Some(message) = node.message.clone() {
        effects.releases.push(message);
      }
      state.next_reference_expiry = state.first_reference_expiry_from(next);
    }
    state.reference_alarm_armed = rearm.is_some();
  }
  for handle in released {
    inner.runtime.observer().reference_expired(handle);
  }
  if let Some(deadline) = rearm {
    ListInner::arm(inner, ExpiryChain::Reference, deadline);
  }
  let _ = inner.execute(effects, None, false, true, false);
}
