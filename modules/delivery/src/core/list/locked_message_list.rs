use alloc::{vec, vec::Vec};
use core::time::Duration;

use lockline_utils_rs::core::{
  sync::{ArcShared, RuntimeToolbox, SyncMutexFamily, SyncMutexLike, ToolboxMutex},
  time::TimerInstant,
  timing::{AlarmListener, TimerDeadline},
};

use crate::core::{
  config::DeliveryConfig,
  consumer::{ConsumerAccess, SubConsumerId},
  env::{DeliveryEnv, DeliveryRuntime},
  error::{DeliveryError, IncorrectCallKind},
  identity::MessageHandle,
  list::{
    delivered_message::DeliveredMessage,
    expiry_sweep::{LockExpirySweep, ReferenceExpirySweep},
    handle_action::HandleAction,
    list_state::ListState,
    locked_node::LockedNode,
    side_effects::SideEffects,
  },
  message::MessageWrapper,
  observer::ExpiryChain,
  store::{MessageStore, StoreFault},
  transaction::{TransactionControl, TransactionManager},
};


type StateMutex<E> = ToolboxMutex<ListState<<E as DeliveryEnv>::Message>, <E as DeliveryEnv>::Toolbox>;

/// The ordered list of messages delivered to one consumer session but not
/// yet deleted, unlocked, or expired.
///
/// One mutex guards the list, the cursor, the node pool, and both expiry
/// chains. Store and consumer calls are never made while that mutex is held;
/// each operation queues them in a [`SideEffects`] batch and runs the batch
/// after the guard drops. Expiry sweeps arrive on alarm threads and follow
/// the same rule.
///
/// Clones share the same underlying list.
pub struct LockedMessageList<E: DeliveryEnv> {
  inner: ArcShared<ListInner<E>>,
}

pub(crate) struct ListInner<E: DeliveryEnv> {
  pub(crate) state:   StateMutex<E>,
  pub(crate) runtime: DeliveryRuntime<E>,
  pub(crate) config:  DeliveryConfig,
}

impl<E: DeliveryEnv> LockedMessageList<E> {
  /// Creates an empty list for one consumer session.
  #[must_use]
  pub fn new(runtime: DeliveryRuntime<E>, config: DeliveryConfig) -> Self {
    let state = <<E::Toolbox as RuntimeToolbox>::MutexFamily as SyncMutexFamily>::create(ListState::new(
      config.lock_expiry(),
      config.reference_expiry(),
    ));
    Self { inner: ArcShared::new(ListInner { state, runtime, config }) }
  }

  /// Adds a newly delivered message at the tail.
  ///
  /// Lock expiry applies only to recoverable messages when an expiry is
  /// configured. The reference-expiry chain is skipped when its delay
  /// exceeds the lock-expiry delay (the lock sweep would always win) or the
  /// message carries a report request.
  pub fn append(&self, message: ArcShared<E::Message>, stored: bool, recoverable: bool) {
    let now = self.inner.runtime.clock().now();
    let suppress_reference = message.has_report_request();
    let mut arm_lock: Option<TimerDeadline> = None;
    let mut arm_reference: Option<TimerDeadline> = None;
    {
      let mut state = self.inner.state.lock();
      let mut node = LockedNode::new(message, stored, recoverable, now);
      if recoverable {
        if let Some(expiry) = state.lock_expiry {
          node.lock_expiry_at = now.saturating_add(expiry);
        }
      }
      if stored && !suppress_reference {
        if let Some(reference) = state.reference_expiry {
          let beaten = matches!(state.lock_expiry, Some(lock) if reference > lock);
          if !beaten {
            node.reference_expiry_at = now.saturating_add(reference);
          }
        }
      }
      let has_lock_expiry = !node.lock_expiry_at.is_none();
      let has_reference_expiry = !node.reference_expiry_at.is_none();
      let index = state.push_back(node);
      if has_lock_expiry {
        if state.next_lock_expiry.is_none() {
          state.next_lock_expiry = Some(index);
        }
        if !state.lock_alarm_armed {
          state.lock_alarm_armed = true;
          arm_lock = state.lock_expiry.map(TimerDeadline::from_duration);
        }
      }
      if has_reference_expiry {
        if state.next_reference_expiry.is_none() {
          state.next_reference_expiry = Some(index);
        }
        if !state.reference_alarm_armed {
          state.reference_alarm_armed = true;
          arm_reference = state.reference_expiry.map(TimerDeadline::from_duration);
        }
      }
      state.valid_callback = true;
      state.end_reached = false;
    }
    if let Some(deadline) = arm_lock {
      ListInner::arm(&self.inner, ExpiryChain::Lock, deadline);
    }
    if let Some(deadline) = arm_reference {
      ListInner::arm(&self.inner, ExpiryChain::Reference, deadline);
    }
  }

  /// Advances the cursor and hands the next locked message to the caller.
  ///
  /// Returns `Ok(None)` once the end of the list is reached. A stored but
  /// non-recoverable message is logically deleted on the way out: it is
  /// marked unstored under the lock and the store removal runs afterwards,
  /// so the application receives it without a store round trip. The body is
  /// materialized outside the lock and cached back into the node.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::NotLocked`] when the cursor lands on a message whose
  /// lock already expired, [`DeliveryError::Resource`] when the body cannot
  /// be fetched, or a session error when the consumer has closed.
  pub fn next_locked(&self) -> Result<Option<DeliveredMessage<E::Message>>, DeliveryError> {
    self.inner.runtime.consumer().check_not_closed()?;
    let now = self.inner.runtime.clock().now();
    let mut effects = SideEffects::new();
    let index;
    let message;
    let cached;
    let copy;
    let arrived;
    {
      let mut state = self.inner.state.lock();
      if let Some(unlocked) = state.current_unlocked {
        let _ = state.unlink(unlocked);
        effects.active_delta += 1;
      }
      let Some(next) = state.after_cursor() else {
        state.end_reached = true;
        state.available = false;
        drop(state);
        return self.inner.execute(effects, None, false, false, false).map(|()| None);
      };
      state.cursor = Some(next);
      state.end_reached = false;
      state.available = true;
      let pubsub = self.inner.config.pubsub();
      let copy_on_read = self.inner.config.copy_on_read();
      let Some(node) = state.node_mut(next) else {
        state.available = false;
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::NoMessageAvailable));
      };
      if node.lock_expired {
        let handle = node.handle;
        drop(state);
        self.inner.execute(effects, None, false, false, false)?;
        return Err(DeliveryError::not_locked(vec![handle]));
      }
      if node.stored && !node.recoverable {
        node.stored = false;
        if let Some(message) = node.message.clone() {
          effects.removes.push((message, false));
        }
      }
      node.was_read = true;
      let Some(live) = node.message.clone() else {
        let handle = node.handle;
        drop(state);
        self.inner.execute(effects, None, false, false, false)?;
        return Err(DeliveryError::not_locked(vec![handle]));
      };
      index = next;
      cached = node.payload.clone();
      copy = pubsub || (node.stored && copy_on_read);
      arrived = node.arrived_at;
      message = live;
    }
    self.inner.execute(effects, None, false, false, false)?;
    let body = match cached {
      | Some(body) => body,
      | None => message.fetch_body(copy).map_err(DeliveryError::resource)?,
    };
    let waited = arrived.remaining_until(now);
    if waited >= self.inner.config.wait_time_granularity() && waited > Duration::ZERO {
      message.record_wait_time(waited.as_millis() as u64);
    }
    {
      let mut state = self.inner.state.lock();
      if state.cursor == Some(index) {
        if let Some(node) = state.node_mut(index) {
          if !node.lock_expired && node.payload.is_none() {
            node.payload = Some(body.clone());
          }
        }
      }
    }
    Ok(Some(DeliveredMessage::new(message, body)))
  }

  /// Looks at the message after the cursor without moving any state.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::NotLocked`] when that message's lock already expired,
  /// or [`DeliveryError::Resource`] when its body cannot be fetched.
  pub fn peek(&self) -> Result<Option<DeliveredMessage<E::Message>>, DeliveryError> {
    let message;
    let cached;
    let copy;
    {
      let state = self.inner.state.lock();
      let Some(next) = state.after_cursor() else {
        return Ok(None);
      };
      let Some(node) = state.node(next) else {
        return Ok(None);
      };
      let Some(live) = node.message.clone() else {
        return Err(DeliveryError::not_locked(vec![node.handle]));
      };
      cached = node.payload.clone();
      copy = self.inner.config.pubsub() || (node.stored && self.inner.config.copy_on_read());
      message = live;
    }
    let body = match cached {
      | Some(body) => body,
      | None => message.fetch_body(copy).map_err(DeliveryError::resource)?,
    };
    Ok(Some(DeliveredMessage::new(message, body)))
  }

  /// Availability and ordering guard for the node under the cursor.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::IncorrectCall`] when no message is available or an
  /// ordered destination is acknowledged out of sequence,
  /// [`DeliveryError::SessionUnavailable`] when `txn` conflicts with the
  /// transaction an ordered destination is pinned to, and
  /// [`DeliveryError::NotLocked`] when the current lock expired (after which
  /// availability is cleared).
  pub fn check_current_available(&self, txn: Option<&E::Txn>) -> Result<(), DeliveryError> {
    if self.inner.config.ordered() && !self.inner.runtime.consumer().is_transaction_allowed(txn) {
      return Err(DeliveryError::SessionUnavailable);
    }
    let mut state = self.inner.state.lock();
    state.check_current_available(self.inner.config.ordered(), false).map(|_| ())
  }

  /// Deletes the message under the cursor.
  ///
  /// Stored messages are removed from the store under `txn` with the store
  /// releasing the delivery slot; unstored ones release the slot directly.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::IncorrectCall`] when no message is available, the
  /// delivery batch ended, the transaction is dead, or an ordered
  /// destination is acknowledged out of sequence; [`DeliveryError::NotLocked`]
  /// when the lock expired; session and resource errors as usual.
  pub fn delete_current(&self, txn: Option<&E::Txn>) -> Result<(), DeliveryError> {
    let consumer = self.inner.runtime.consumer();
    consumer.check_not_closed()?;
    if let Some(txn) = txn {
      if !txn.is_alive() {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::DeadTransaction));
      }
    }
    if self.inner.config.ordered() && !consumer.is_transaction_allowed(txn) {
      return Err(DeliveryError::SessionUnavailable);
    }
    let mut effects = SideEffects::new();
    {
      let mut state = self.inner.state.lock();
      if !state.valid_callback {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::OutsideCallback));
      }
      let index = state.check_current_available(self.inner.config.ordered(), true)?;
      if let Some(node) = state.unlink(index) {
        if node.stored {
          if let Some(message) = node.message {
            effects.removes.push((message, true));
          }
        } else {
          effects.active_delta += 1;
        }
      }
    }
    self.inner.execute(effects, txn, false, false, false)
  }

  /// Deletes every message from the head through the cursor.
  ///
  /// When no ambient transaction is given and stored messages are involved,
  /// one local transaction covers them all and commits after the lock is
  /// released. Messages whose lock already expired are reported, not
  /// deleted; the rest of the batch still goes through.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::IncorrectCall`] when no delivery batch is in progress,
  /// [`DeliveryError::NotLocked`] aggregating every affected handle,
  /// [`DeliveryError::Resource`] on store or transaction failure (a local
  /// transaction is rolled back first), plus the usual guard errors.
  pub fn delete_seen(&self, txn: Option<&E::Txn>) -> Result<(), DeliveryError> {
    let consumer = self.inner.runtime.consumer();
    consumer.check_not_closed()?;
    if let Some(txn) = txn {
      if !txn.is_alive() {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::DeadTransaction));
      }
    }
    if self.inner.config.ordered() {
      if txn.is_none() {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::OrderingViolated));
      }
      if !consumer.is_transaction_allowed(txn) {
        return Err(DeliveryError::SessionUnavailable);
      }
    }
    let mut not_locked: Vec<MessageHandle> = Vec::new();
    let mut stored: Vec<ArcShared<E::Message>> = Vec::new();
    let mut delta = 0usize;
    {
      let mut state = self.inner.state.lock();
      if !state.valid_callback {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::OutsideCallback));
      }
      let end = if state.end_reached { state.tail } else { state.cursor };
      let Some(end) = end else {
        return Ok(());
      };
      let mut pending = Vec::new();
      let mut walk = state.head;
      while let Some(current) = walk {
        pending.push(current);
        if current == end {
          break;
        }
        walk = state.next_of(current);
      }
      for current in pending {
        let Some(node) = state.unlink(current) else {
          continue;
        };
        if node.lock_expired {
          not_locked.push(node.handle);
          continue;
        }
        delta += 1;
        if node.stored {
          if let Some(message) = node.message {
            stored.push(message);
          }
        }
      }
      state.available = false;
    }
    let local = if txn.is_none() && !stored.is_empty() {
      Some(self.inner.runtime.transactions().create_local().map_err(DeliveryError::resource)?)
    } else {
      None
    };
    let active = txn.or(local.as_ref());
    let store = self.inner.runtime.store();
    for message in &stored {
      match store.remove_message(message, active, false) {
        | Ok(()) => {},
        | Err(StoreFault::NotLocked(handle)) => not_locked.push(handle),
        | Err(fault) => {
          if let Some(local) = &local {
            let _ = local.rollback();
          }
          return Err(DeliveryError::resource(fault));
        },
      }
    }
    if let Some(local) = local {
      local.commit().map_err(DeliveryError::resource)?;
    }
    if delta > 0 {
      consumer.remove_active_messages(delta);
    }
    if not_locked.is_empty() {
      Ok(())
    } else {
      Err(DeliveryError::not_locked(not_locked))
    }
  }

  /// Applies one action to each of the given handles.
  ///
  /// Matching scans forward from the head, skipping the provisionally
  /// unlocked node. A node owned by a sub-consumer matches only a request
  /// from that sub-consumer. Expired matches are silently dropped from the
  /// list and reported with the unmatched handles in one aggregated error;
  /// partial progress on the other handles is preserved. Deletes reuse the
  /// ambient transaction when given; otherwise a local transaction covers
  /// multi-message (or side-effectful) batches and a single plain delete
  /// auto-commits.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::IncorrectCall`] for an empty handle set or dead
  /// transaction, [`DeliveryError::NotLocked`] aggregating missing handles,
  /// [`DeliveryError::Resource`] on store failure (a local transaction is
  /// rolled back first), and session errors.
  pub fn process_handles(
    &self,
    handles: &[MessageHandle],
    action: HandleAction,
    sub_consumer: Option<SubConsumerId>,
    txn: Option<&E::Txn>,
    bump_redelivery: bool,
  ) -> Result<(), DeliveryError> {
    let consumer = self.inner.runtime.consumer();
    consumer.check_not_closed()?;
    if handles.is_empty() {
      return Err(DeliveryError::incorrect_call(IncorrectCallKind::EmptyHandleSet));
    }
    if let Some(txn) = txn {
      if !txn.is_alive() {
        return Err(DeliveryError::incorrect_call(IncorrectCallKind::DeadTransaction));
      }
    }
    let mut missing: Vec<MessageHandle> = Vec::new();
    let mut unlocks: Vec<ArcShared<E::Message>> = Vec::new();
    let mut deletes: Vec<ArcShared<E::Message>> = Vec::new();
    let mut delta = 0usize;
    {
      let mut state = self.inner.state.lock();
      for handle in handles {
        let mut walk = state.head;
        let mut found = None;
        while let Some(current) = walk {
          if state.current_unlocked != Some(current) {
            if let Some(node) = state.node(current) {
              if node.handle == *handle {
                found = Some(current);
                break;
              }
            }
          }
          walk = state.next_of(current);
        }
        let Some(current) = found else {
          missing.push(*handle);
          continue;
        };
        let expired = state.node(current).is_none_or(|node| node.lock_expired);
        if expired {
          let _ = state.unlink(current);
          missing.push(*handle);
          continue;
        }
        // An owned node answers only to its owning sub-consumer.
        let owner = state.node(current).and_then(|node| node.owner);
        if owner.is_some() && owner != sub_consumer {
          missing.push(*handle);
          continue;
        }
        match action {
          | HandleAction::Read => {
            if let Some(node) = state.node_mut(current) {
              node.lock_expiry_at = TimerInstant::NONE;
              node.was_read = true;
              if let Some(requester) = sub_consumer {
                node.owner = Some(requester);
              }
            }
            if state.next_lock_expiry == Some(current) {
              let next = state.next_of(current);
              state.next_lock_expiry = state.first_lock_expiry_from(next);
            }
          },
          | HandleAction::Unlock => {
            if let Some(node) = state.unlink(current) {
              delta += 1;
              if node.stored {
                if let Some(message) = node.message {
                  unlocks.push(message);
                }
              }
            }
          },
          | HandleAction::Delete => {
            if let Some(node) = state.unlink(current) {
              delta += 1;
              if node.stored {
                if let Some(message) = node.message {
                  deletes.push(message);
                }
              }
            }
          },
        }
      }
    }
    let store = self.inner.runtime.store();
    for message in &unlocks {
      match store.unlock_message(message, bump_redelivery) {
        | Ok(()) => {},
        | Err(StoreFault::NotLocked(handle)) => missing.push(handle),
        | Err(fault) => return Err(DeliveryError::resource(fault)),
      }
    }
    let side_effectful = deletes.len() == 1 && deletes.iter().any(|message| message.delete_has_side_effects());
    let need_local = txn.is_none() && (deletes.len() > 1 || side_effectful);
    let local = if need_local {
      Some(self.inner.runtime.transactions().create_local().map_err(DeliveryError::resource)?)
    } else {
      None
    };
    let active = txn.or(local.as_ref());
    for message in &deletes {
      match store.remove_message(message, active, false) {
        | Ok(()) => {},
        | Err(StoreFault::NotLocked(handle)) => missing.push(handle),
        | Err(fault) => {
          if let Some(local) = &local {
            let _ = local.rollback();
          }
          return Err(DeliveryError::resource(fault));
        },
      }
    }
    if let Some(local) = local {
      local.commit().map_err(DeliveryError::resource)?;
    }
    if delta > 0 {
      consumer.remove_active_messages(delta);
    }
    if missing.is_empty() {
      Ok(())
    } else {
      Err(DeliveryError::not_locked(missing))
    }
  }

  /// Provisionally unlocks the message under the cursor.
  ///
  /// The node stays in the list (so bulk scans can still see it is spoken
  /// for) until the next cursor operation removes it; the store unlock runs
  /// once the list mutex is released.
  ///
  /// # Errors
  ///
  /// The availability guard errors, plus session and store errors.
  pub fn unlock_current(&self, bump_redelivery: bool) -> Result<(), DeliveryError> {
    self.inner.runtime.consumer().check_not_closed()?;
    let mut effects = SideEffects::new();
    {
      let mut state = self.inner.state.lock();
      let index = state.check_current_available(false, true)?;
      if let Some(node) = state.node_mut(index) {
        node.lock_expiry_at = TimerInstant::NONE;
        if node.stored {
          node.stored = false;
          if let Some(message) = node.message.clone() {
            effects.unlocks.push(message);
          }
        }
      }
      if state.next_lock_expiry == Some(index) {
        let next = state.next_of(index);
        state.next_lock_expiry = state.first_lock_expiry_from(next);
      }
      state.current_unlocked = Some(index);
    }
    self.inner.execute(effects, None, bump_redelivery, false, false)
  }

  /// Unlocks and removes every message in the list.
  ///
  /// The provisionally unlocked node is removed without a second store
  /// unlock. The delivery-slot decrement is aggregated into one consumer
  /// call after the lock is released. With `closing` set, a dropped session
  /// observed by a store unlock is propagated; otherwise the consumer is
  /// notified and the sweep continues.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::NotLocked`] aggregating externally removed messages,
  /// [`DeliveryError::SessionDropped`] as described, and resource errors.
  pub fn unlock_all(&self, closing: bool, bump_redelivery: bool) -> Result<(), DeliveryError> {
    if !closing {
      self.inner.runtime.consumer().check_not_closed()?;
    }
    let mut effects = SideEffects::new();
    {
      let mut state = self.inner.state.lock();
      while let Some(index) = state.head {
        let skip_unlock = state.current_unlocked == Some(index);
        let Some(node) = state.unlink(index) else {
          break;
        };
        if node.lock_expired {
          continue;
        }
        effects.active_delta += 1;
        if node.stored && !skip_unlock {
          if let Some(message) = node.message {
            effects.unlocks.push(message);
          }
        }
      }
      state.cursor = None;
      state.callback_entry = None;
      state.available = false;
      state.end_reached = false;
      state.valid_callback = false;
    }
    self.inner.execute(effects, None, bump_redelivery, false, !closing)
  }

  /// Unlocks every message the application has not yet read, then resets the
  /// cursor state so the session is ready for its next delivery batch.
  ///
  /// When the end of the list was reached there is nothing unread and only
  /// the reset happens.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::NotLocked`] aggregating externally removed messages,
  /// plus session and resource errors.
  pub fn unlock_all_unread(&self) -> Result<(), DeliveryError> {
    self.inner.runtime.consumer().check_not_closed()?;
    let mut effects = SideEffects::new();
    {
      let mut state = self.inner.state.lock();
      if !state.end_reached {
        let mut walk = state.after_cursor();
        while let Some(index) = walk {
          walk = state.next_of(index);
          let Some(node) = state.unlink(index) else {
            continue;
          };
          if node.lock_expired {
            continue;
          }
          effects.active_delta += 1;
          if node.stored {
            if let Some(message) = node.message {
              effects.unlocks.push(message);
            }
          }
        }
      }
      state.cursor = state.tail;
      state.callback_entry = state.tail;
      state.available = false;
      state.end_reached = false;
      state.valid_callback = false;
    }
    self.inner.execute(effects, None, false, false, false)
  }

  /// Records the current cursor position as the start of a delivery batch;
  /// [`Self::reset_cursor`] rewinds to it.
  pub fn begin_callback(&self) {
    let mut state = self.inner.state.lock();
    state.callback_entry = state.cursor;
    state.valid_callback = true;
  }

  /// Rewinds the cursor to where the current delivery batch started,
  /// dropping the provisionally unlocked node if one remains.
  pub fn reset_cursor(&self) {
    let mut delta = 0usize;
    {
      let mut state = self.inner.state.lock();
      if let Some(unlocked) = state.current_unlocked {
        let _ = state.unlink(unlocked);
        delta += 1;
      }
      state.cursor = state.callback_entry;
      state.end_reached = false;
      state.available = false;
    }
    if delta > 0 {
      self.inner.runtime.consumer().remove_active_messages(delta);
    }
  }

  /// Unlocks and removes every message owned by a closing sub-consumer.
  ///
  /// # Errors
  ///
  /// [`DeliveryError::NotLocked`] aggregating externally removed messages,
  /// plus resource errors.
  pub fn clean_out_sub_consumer(&self, owner: SubConsumerId, bump_redelivery: bool) -> Result<(), DeliveryError> {
    let mut effects = SideEffects::new();
    {
      let mut state = self.inner.state.lock();
      let mut walk = state.head;
      while let Some(index) = walk {
        walk = state.next_of(index);
        let owned = state.node(index).is_some_and(|node| node.owner == Some(owner));
        if !owned {
          continue;
        }
        let Some(node) = state.unlink(index) else {
          continue;
        };
        if node.lock_expired {
          continue;
        }
        effects.active_delta += 1;
        if node.stored {
          if let Some(message) = node.message {
            effects.unlocks.push(message);
          }
        }
      }
    }
    self.inner.execute(effects, None, bump_redelivery, false, false)
  }

  /// Returns `true` when a message is waiting after the cursor.
  #[must_use]
  pub fn has_next(&self) -> bool {
    self.inner.state.lock().after_cursor().is_some()
  }

  /// Number of messages after the cursor.
  #[must_use]
  pub fn remaining_count(&self) -> usize {
    self.inner.state.lock().count_after_cursor()
  }

  /// Number of messages currently locked in the list.
  #[must_use]
  pub fn locked_count(&self) -> usize {
    self.inner.state.lock().arena.live()
  }

  /// Number of recycled node slots held by the bounded pool.
  #[must_use]
  pub fn pooled_count(&self) -> usize {
    self.inner.state.lock().arena.pool_len()
  }

  /// Changes the lock expiry applied to messages appended from now on;
  /// `None` disables lock expiry.
  pub fn set_lock_expiry(&self, expiry: Option<Duration>) {
    self.inner.state.lock().lock_expiry = expiry;
  }

  #[cfg(test)]
  pub(crate) fn inner(&self) -> &ArcShared<ListInner<E>> {
    &self.inner
  }
}

impl<E: DeliveryEnv> Clone for LockedMessageList<E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<E: DeliveryEnv> ListInner<E> {
  /// Arms a one-shot expiry alarm. Arming never runs the sweep inline, so
  /// callers may do this right after (or before) releasing the list mutex.
  pub(crate) fn arm(inner: &ArcShared<Self>, chain: ExpiryChain, deadline: TimerDeadline) {
    let listener: ArcShared<dyn AlarmListener> = match chain {
      | ExpiryChain::Lock => ArcShared::new(LockExpirySweep { inner: inner.clone() }).into_dyn(|sweep| sweep as _),
      | ExpiryChain::Reference => {
        ArcShared::new(ReferenceExpirySweep { inner: inner.clone() }).into_dyn(|sweep| sweep as _)
      },
    };
    inner.runtime.observer().alarm_armed(chain, deadline);
    inner.runtime.alarms().arm(deadline, listener);
  }

  /// Runs a side-effect batch after the list mutex has been released.
  ///
  /// `swallow_faults` (sweep mode) routes every failure to the observer
  /// instead of the caller; `notify_dropped` turns a dropped-session store
  /// fault into a consumer notification instead of an error.
  pub(crate) fn execute(
    &self,
    mut effects: SideEffects<E::Message>,
    txn: Option<&E::Txn>,
    bump_redelivery: bool,
    swallow_faults: bool,
    notify_dropped: bool,
  ) -> Result<(), DeliveryError> {
    let store = self.runtime.store();
    let consumer = self.runtime.consumer();
    let observer = self.runtime.observer();
    for (message, decrement) in effects.removes.drain(..) {
      match store.remove_message(&message, txn, decrement) {
        | Ok(()) => {},
        | Err(StoreFault::NotLocked(handle)) if swallow_faults => {
          observer.store_fault_swallowed(&StoreFault::NotLocked(handle));
        },
        | Err(StoreFault::NotLocked(handle)) => effects.not_locked.push(handle),
        | Err(fault) if swallow_faults => observer.store_fault_swallowed(&fault),
        | Err(fault) => return Err(DeliveryError::resource(fault)),
      }
    }
    for message in effects.unlocks.drain(..) {
      match store.unlock_message(&message, bump_redelivery) {
        | Ok(()) => {},
        | Err(StoreFault::NotLocked(handle)) if swallow_faults => {
          observer.store_fault_swallowed(&StoreFault::NotLocked(handle));
        },
        | Err(StoreFault::NotLocked(handle)) => effects.not_locked.push(handle),
        | Err(StoreFault::SessionDropped) if notify_dropped => consumer.on_session_dropped(),
        | Err(StoreFault::SessionDropped) if !swallow_faults => return Err(DeliveryError::SessionDropped),
        | Err(fault) if swallow_faults => observer.store_fault_swallowed(&fault),
        | Err(fault) => return Err(DeliveryError::resource(fault)),
      }
    }
    for message in effects.releases.drain(..) {
      if let Err(fault) = message.release_body() {
        // Only a memory optimization was lost.
        observer.store_fault_swallowed(&fault);
      }
    }
    if effects.active_delta > 0 {
      consumer.remove_active_messages(effects.active_delta);
    }
    if effects.not_locked.is_empty() {
      Ok(())
    } else {
      Err(DeliveryError::not_locked(effects.not_locked))
    }
  }
}
