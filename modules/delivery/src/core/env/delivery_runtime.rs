use lockline_utils_rs::core::{
  sync::ArcShared,
  time::MonotonicClock,
  timing::AlarmService,
};

use crate::core::{env::delivery_env::DeliveryEnv, observer::DeliveryObserver};

/// Shared collaborator handles a delivery list is built from.
///
/// Clones share the underlying collaborators, so one runtime can serve every
/// session of a connection.
pub struct DeliveryRuntime<E: DeliveryEnv> {
  store:        ArcShared<E::Store>,
  consumer:     ArcShared<E::Consumer>,
  transactions: ArcShared<E::TxnManager>,
  alarms:       ArcShared<dyn AlarmService>,
  clock:        ArcShared<dyn MonotonicClock>,
  observer:     ArcShared<dyn DeliveryObserver>,
}

impl<E: DeliveryEnv> DeliveryRuntime<E> {
  /// Creates a runtime from its collaborator handles.
  #[must_use]
  pub fn new(
    store: ArcShared<E::Store>,
    consumer: ArcShared<E::Consumer>,
    transactions: ArcShared<E::TxnManager>,
    alarms: ArcShared<dyn AlarmService>,
    clock: ArcShared<dyn MonotonicClock>,
    observer: ArcShared<dyn DeliveryObserver>,
  ) -> Self {
    Self { store, consumer, transactions, alarms, clock, observer }
  }

  /// Retrieves the backing store.
  #[must_use]
  pub fn store(&self) -> &ArcShared<E::Store> {
    &self.store
  }

  /// Retrieves the owning consumer session.
  #[must_use]
  pub fn consumer(&self) -> &ArcShared<E::Consumer> {
    &self.consumer
  }

  /// Retrieves the local-transaction factory.
  #[must_use]
  pub fn transactions(&self) -> &ArcShared<E::TxnManager> {
    &self.transactions
  }

  /// Retrieves the alarm service.
  #[must_use]
  pub fn alarms(&self) -> &ArcShared<dyn AlarmService> {
    &self.alarms
  }

  /// Retrieves the monotonic clock.
  #[must_use]
  pub fn clock(&self) -> &ArcShared<dyn MonotonicClock> {
    &self.clock
  }

  /// Retrieves the observer.
  #[must_use]
  pub fn observer(&self) -> &ArcShared<dyn DeliveryObserver> {
    &self.observer
  }
}

impl<E: DeliveryEnv> Clone for DeliveryRuntime<E> {
  fn clone(&self) -> Self {
    Self {
      store:        self.store.clone(),
      consumer:     self.consumer.clone(),
      transactions: self.transactions.clone(),
      alarms:       self.alarms.clone(),
      clock:        self.clock.clone(),
      observer:     self.observer.clone(),
    }
  }
}
