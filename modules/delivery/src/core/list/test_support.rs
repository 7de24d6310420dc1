use alloc::{string::String, vec::Vec};

use lockline_utils_rs::core::{
  sync::{ArcShared, NoStdMutex, NoStdToolbox},
  time::ManualClock,
  timing::{AlarmHandle, AlarmListener, AlarmService, TimerDeadline},
};
use portable_atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};

use crate::core::{
  config::DeliveryConfig,
  consumer::{ConsumerAccess, SessionFault},
  env::{DeliveryEnv, DeliveryRuntime},
  identity::{MessageHandle, OriginId},
  list::LockedMessageList,
  message::MessageWrapper,
  store::{MessageStore, StoreFault},
  transaction::{TransactionControl, TransactionManager},
};

pub(crate) struct TestEnv;

impl DeliveryEnv for TestEnv {
  type Consumer = FakeConsumer;
  type Message = FakeMessage;
  type Store = RecordingStore;
  type Toolbox = NoStdToolbox;
  type Txn = FakeTxn;
  type TxnManager = FakeTxnManager;
}

pub(crate) struct FakeMessage {
  handle:       MessageHandle,
  body:         u64,
  report:       bool,
  side_effects: bool,
  redelivery:   u32,
  fetches:      AtomicU32,
  copies:       AtomicU32,
  releases:     AtomicU32,
  last_wait:    AtomicU64,
  fail_fetch:   AtomicBool,
}

impl FakeMessage {
  pub(crate) fn new(value: u64) -> Self {
    Self {
      handle:       MessageHandle::new(OriginId::from_bytes([7; 8]), value),
      body:         value,
      report:       false,
      side_effects: false,
      redelivery:   0,
      fetches:      AtomicU32::new(0),
      copies:       AtomicU32::new(0),
      releases:     AtomicU32::new(0),
      last_wait:    AtomicU64::new(0),
      fail_fetch:   AtomicBool::new(false),
    }
  }

  pub(crate) fn with_report(mut self) -> Self {
    self.report = true;
    self
  }

  pub(crate) fn with_side_effects(mut self) -> Self {
    self.side_effects = true;
    self
  }

  pub(crate) fn fetch_count(&self) -> u32 {
    self.fetches.load(Ordering::SeqCst)
  }

  pub(crate) fn copy_count(&self) -> u32 {
    self.copies.load(Ordering::SeqCst)
  }

  pub(crate) fn release_count(&self) -> u32 {
    self.releases.load(Ordering::SeqCst)
  }

  pub(crate) fn last_wait(&self) -> u64 {
    self.last_wait.load(Ordering::SeqCst)
  }

  pub(crate) fn fail_next_fetch(&self) {
    self.fail_fetch.store(true, Ordering::SeqCst);
  }
}

impl MessageWrapper for FakeMessage {
  type Body = u64;

  fn handle(&self) -> MessageHandle {
    self.handle
  }

  fn fetch_body(&self, copy: bool) -> Result<u64, StoreFault> {
    if self.fail_fetch.swap(false, Ordering::SeqCst) {
      return Err(StoreFault::backend("fetch failed"));
    }
    self.fetches.fetch_add(1, Ordering::SeqCst);
    if copy {
      self.copies.fetch_add(1, Ordering::SeqCst);
    }
    Ok(self.body)
  }

  fn release_body(&self) -> Result<(), StoreFault> {
    self.releases.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }

  fn redelivery_estimate(&self) -> u32 {
    self.redelivery
  }

  fn record_wait_time(&self, waited_millis: u64) {
    self.last_wait.store(waited_millis, Ordering::SeqCst);
  }

  fn has_report_request(&self) -> bool {
    self.report
  }

  fn delete_has_side_effects(&self) -> bool {
    self.side_effects
  }
}

pub(crate) fn message(value: u64) -> ArcShared<FakeMessage> {
  ArcShared::new(FakeMessage::new(value))
}

pub(crate) fn handle_of(value: u64) -> MessageHandle {
  MessageHandle::new(OriginId::from_bytes([7; 8]), value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RemoveRecord {
  pub(crate) handle:    MessageHandle,
  pub(crate) had_txn:   bool,
  pub(crate) decrement: bool,
}

pub(crate) struct RecordingStore {
  removes:     NoStdMutex<Vec<RemoveRecord>>,
  unlocks:     NoStdMutex<Vec<(MessageHandle, bool)>>,
  not_locked:  NoStdMutex<Vec<MessageHandle>>,
  fail_remove: NoStdMutex<Option<StoreFault>>,
  fail_unlock: NoStdMutex<Option<StoreFault>>,
}

impl RecordingStore {
  pub(crate) fn new() -> Self {
    Self {
      removes:     NoStdMutex::new(Vec::new()),
      unlocks:     NoStdMutex::new(Vec::new()),
      not_locked:  NoStdMutex::new(Vec::new()),
      fail_remove: NoStdMutex::new(None),
      fail_unlock: NoStdMutex::new(None),
    }
  }

  pub(crate) fn removes(&self) -> Vec<RemoveRecord> {
    self.removes.lock().clone()
  }

  pub(crate) fn unlocks(&self) -> Vec<(MessageHandle, bool)> {
    self.unlocks.lock().clone()
  }

  /// Makes store calls for this handle fail with a not-locked fault.
  pub(crate) fn mark_not_locked(&self, handle: MessageHandle) {
    self.not_locked.lock().push(handle);
  }

  pub(crate) fn fail_next_remove(&self, fault: StoreFault) {
    *self.fail_remove.lock() = Some(fault);
  }

  pub(crate) fn fail_next_unlock(&self, fault: StoreFault) {
    *self.fail_unlock.lock() = Some(fault);
  }
}

impl MessageStore<FakeMessage, FakeTxn> for RecordingStore {
  fn remove_message(&self, message: &FakeMessage, txn: Option<&FakeTxn>, decrement_active: bool) -> Result<(), StoreFault> {
    if let Some(fault) = self.fail_remove.lock().take() {
      return Err(fault);
    }
    let handle = message.handle();
    if self.not_locked.lock().contains(&handle) {
      return Err(StoreFault::not_locked(handle));
    }
    self.removes.lock().push(RemoveRecord { handle, had_txn: txn.is_some(), decrement: decrement_active });
    Ok(())
  }

  fn unlock_message(&self, message: &FakeMessage, bump_redelivery: bool) -> Result<(), StoreFault> {
    if let Some(fault) = self.fail_unlock.lock().take() {
      return Err(fault);
    }
    let handle = message.handle();
    if self.not_locked.lock().contains(&handle) {
      return Err(StoreFault::not_locked(handle));
    }
    self.unlocks.lock().push((handle, bump_redelivery));
    Ok(())
  }
}

pub(crate) struct FakeTxn {
  alive:     AtomicBool,
  commits:   ArcShared<AtomicU32>,
  rollbacks: ArcShared<AtomicU32>,
}

impl FakeTxn {
  pub(crate) fn new() -> Self {
    Self {
      alive:     AtomicBool::new(true),
      commits:   ArcShared::new(AtomicU32::new(0)),
      rollbacks: ArcShared::new(AtomicU32::new(0)),
    }
  }

  pub(crate) fn kill(&self) {
    self.alive.store(false, Ordering::SeqCst);
  }

  pub(crate) fn commit_count(&self) -> u32 {
    self.commits.load(Ordering::SeqCst)
  }

  pub(crate) fn rollback_count(&self) -> u32 {
    self.rollbacks.load(Ordering::SeqCst)
  }
}

impl TransactionControl for FakeTxn {
  fn is_alive(&self) -> bool {
    self.alive.load(Ordering::SeqCst)
  }

  fn commit(&self) -> Result<(), StoreFault> {
    self.commits.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }

  fn rollback(&self) -> Result<(), StoreFault> {
    self.rollbacks.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}

pub(crate) struct FakeTxnManager {
  created:   AtomicU32,
  commits:   ArcShared<AtomicU32>,
  rollbacks: ArcShared<AtomicU32>,
}

impl FakeTxnManager {
  pub(crate) fn new() -> Self {
    Self {
      created:   AtomicU32::new(0),
      commits:   ArcShared::new(AtomicU32::new(0)),
      rollbacks: ArcShared::new(AtomicU32::new(0)),
    }
  }

  pub(crate) fn created_count(&self) -> u32 {
    self.created.load(Ordering::SeqCst)
  }

  pub(crate) fn commit_count(&self) -> u32 {
    self.commits.load(Ordering::SeqCst)
  }

  pub(crate) fn rollback_count(&self) -> u32 {
    self.rollbacks.load(Ordering::SeqCst)
  }
}

impl TransactionManager for FakeTxnManager {
  type Txn = FakeTxn;

  fn create_local(&self) -> Result<FakeTxn, StoreFault> {
    self.created.fetch_add(1, Ordering::SeqCst);
    Ok(FakeTxn {
      alive:     AtomicBool::new(true),
      commits:   self.commits.clone(),
      rollbacks: self.rollbacks.clone(),
    })
  }
}

pub(crate) struct FakeConsumer {
  closed:        NoStdMutex<Option<SessionFault>>,
  removed:       AtomicUsize,
  removal_calls: AtomicU32,
  allow_txn:     AtomicBool,
  dropped_hooks: AtomicU32,
}

impl FakeConsumer {
  pub(crate) fn new() -> Self {
    Self {
      closed:        NoStdMutex::new(None),
      removed:       AtomicUsize::new(0),
      removal_calls: AtomicU32::new(0),
      allow_txn:     AtomicBool::new(true),
      dropped_hooks: AtomicU32::new(0),
    }
  }

  pub(crate) fn close(&self, fault: SessionFault) {
    *self.closed.lock() = Some(fault);
  }

  pub(crate) fn removed_total(&self) -> usize {
    self.removed.load(Ordering::SeqCst)
  }

  pub(crate) fn removal_calls(&self) -> u32 {
    self.removal_calls.load(Ordering::SeqCst)
  }

  pub(crate) fn forbid_transactions(&self) {
    self.allow_txn.store(false, Ordering::SeqCst);
  }

  pub(crate) fn dropped_hook_count(&self) -> u32 {
    self.dropped_hooks.load(Ordering::SeqCst)
  }
}

impl ConsumerAccess<FakeTxn> for FakeConsumer {
  fn check_not_closed(&self) -> Result<(), SessionFault> {
    match *self.closed.lock() {
      | Some(fault) => Err(fault),
      | None => Ok(()),
    }
  }

  fn remove_active_messages(&self, count: usize) {
    self.removed.fetch_add(count, Ordering::SeqCst);
    self.removal_calls.fetch_add(1, Ordering::SeqCst);
  }

  fn is_transaction_allowed(&self, _txn: Option<&FakeTxn>) -> bool {
    self.allow_txn.load(Ordering::SeqCst)
  }

  fn on_session_dropped(&self) {
    self.dropped_hooks.fetch_add(1, Ordering::SeqCst);
  }
}

pub(crate) struct ArmedAlarm {
  pub(crate) deadline: TimerDeadline,
  pub(crate) listener: ArcShared<dyn AlarmListener>,
  pub(crate) handle:   AlarmHandle,
}

/// Alarm service that records arms; tests play the timer thread by firing
/// the recorded listeners.
pub(crate) struct CountingAlarmService {
  armed:       NoStdMutex<Vec<ArmedAlarm>>,
  total_armed: AtomicU32,
}

impl CountingAlarmService {
  pub(crate) fn new() -> Self {
    Self { armed: NoStdMutex::new(Vec::new()), total_armed: AtomicU32::new(0) }
  }

  pub(crate) fn outstanding(&self) -> usize {
    self.armed.lock().len()
  }

  pub(crate) fn total_armed(&self) -> u32 {
    self.total_armed.load(Ordering::SeqCst)
  }

  pub(crate) fn last_deadline(&self) -> Option<TimerDeadline> {
    self.armed.lock().last().map(|alarm| alarm.deadline)
  }

  /// Fires every outstanding alarm; re-arms recorded during the fire are
  /// kept for the next round.
  pub(crate) fn fire_outstanding(&self) {
    let drained: Vec<ArmedAlarm> = {
      let mut armed = self.armed.lock();
      armed.drain(..).collect()
    };
    for alarm in drained {
      if !alarm.handle.is_cancelled() {
        alarm.listener.alarm();
      }
    }
  }
}

impl AlarmService for CountingAlarmService {
  fn arm(&self, deadline: TimerDeadline, listener: ArcShared<dyn AlarmListener>) -> AlarmHandle {
    let handle = AlarmHandle::new();
    self.total_armed.fetch_add(1, Ordering::SeqCst);
    self.armed.lock().push(ArmedAlarm { deadline, listener, handle: handle.clone() });
    handle
  }
}

pub(crate) struct RecordingObserver {
  lock_expired:      NoStdMutex<Vec<MessageHandle>>,
  reference_expired: NoStdMutex<Vec<MessageHandle>>,
  swallowed:         AtomicU32,
}

impl RecordingObserver {
  pub(crate) fn new() -> Self {
    Self {
      lock_expired:      NoStdMutex::new(Vec::new()),
      reference_expired: NoStdMutex::new(Vec::new()),
      swallowed:         AtomicU32::new(0),
    }
  }

  pub(crate) fn lock_expired_handles(&self) -> Vec<MessageHandle> {
    self.lock_expired.lock().clone()
  }

  pub(crate) fn reference_expired_handles(&self) -> Vec<MessageHandle> {
    self.reference_expired.lock().clone()
  }

  pub(crate) fn swallowed_count(&self) -> u32 {
    self.swallowed.load(Ordering::SeqCst)
  }
}

impl crate::core::observer::DeliveryObserver for RecordingObserver {
  fn lock_expired(&self, handle: MessageHandle) {
    self.lock_expired.lock().push(handle);
  }

  fn reference_expired(&self, handle: MessageHandle) {
    self.reference_expired.lock().push(handle);
  }

  fn store_fault_swallowed(&self, _fault: &StoreFault) {
    self.swallowed.fetch_add(1, Ordering::SeqCst);
  }
}

/// Fully wired list plus every collaborator double, for direct assertions.
pub(crate) struct TestRig {
  pub(crate) list:         LockedMessageList<TestEnv>,
  pub(crate) store:        ArcShared<RecordingStore>,
  pub(crate) consumer:     ArcShared<FakeConsumer>,
  pub(crate) transactions: ArcShared<FakeTxnManager>,
  pub(crate) alarms:       ArcShared<CountingAlarmService>,
  pub(crate) clock:        ArcShared<ManualClock>,
  pub(crate) observer:     ArcShared<RecordingObserver>,
}

impl TestRig {
  pub(crate) fn new(config: DeliveryConfig) -> Self {
    let store = ArcShared::new(RecordingStore::new());
    let consumer = ArcShared::new(FakeConsumer::new());
    let transactions = ArcShared::new(FakeTxnManager::new());
    let alarms = ArcShared::new(CountingAlarmService::new());
    let clock = ArcShared::new(ManualClock::new());
    let observer = ArcShared::new(RecordingObserver::new());
    let runtime = DeliveryRuntime::<TestEnv>::new(
      store.clone(),
      consumer.clone(),
      transactions.clone(),
      alarms.clone().into_dyn(|service| service as _),
      clock.clone().into_dyn(|clock| clock as _),
      observer.clone().into_dyn(|observer| observer as _),
    );
    Self {
      list: LockedMessageList::new(runtime, config),
      store,
      consumer,
      transactions,
      alarms,
      clock,
      observer,
    }
  }
}

pub(crate) fn backend_fault(reason: &str) -> StoreFault {
  StoreFault::Backend(String::from(reason))
}
