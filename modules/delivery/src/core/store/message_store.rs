use crate::core::{message::MessageWrapper, store::store_fault::StoreFault, transaction::TransactionControl};

/// Backing store holding the durable form of locked messages.
///
/// Call-throughs with no algorithmic weight of their own; the engine never
/// invokes them while holding its list mutex.
pub trait MessageStore<M: MessageWrapper, T: TransactionControl>: Send + Sync + 'static {
  /// Removes a message from the store, under `txn` when one is given.
  ///
  /// `decrement_active` asks the store to also release the delivery slot the
  /// message occupied; the engine passes `false` when it aggregates that
  /// accounting itself.
  ///
  /// # Errors
  ///
  /// [`StoreFault::NotLocked`] when the message was removed externally;
  /// treated as expected by every caller.
  fn remove_message(&self, message: &M, txn: Option<&T>, decrement_active: bool) -> Result<(), StoreFault>;

  /// Returns a locked message to general availability.
  ///
  /// `bump_redelivery` increments the message's redelivery count so the next
  /// consumer can observe the failed delivery.
  ///
  /// # Errors
  ///
  /// [`StoreFault::NotLocked`] when the message was removed externally.
  fn unlock_message(&self, message: &M, bump_redelivery: bool) -> Result<(), StoreFault>;
}
