use crate::core::{consumer::session_fault::SessionFault, transaction::TransactionControl};

/// Gateway to the consumer session owning a delivery list.
///
/// The session lock sits above the list mutex in the lock hierarchy, so the
/// engine only calls these methods while the list mutex is not held.
pub trait ConsumerAccess<T: TransactionControl>: Send + Sync + 'static {
  /// Verifies the session is still open.
  ///
  /// # Errors
  ///
  /// Returns the session failure when it has closed or its connection died.
  fn check_not_closed(&self) -> Result<(), SessionFault>;

  /// Releases `count` delivery slots after messages left the list.
  fn remove_active_messages(&self, count: usize);

  /// Returns `true` when acting under `txn` is currently allowed; ordered
  /// destinations pin all acknowledgement to one transaction at a time.
  fn is_transaction_allowed(&self, txn: Option<&T>) -> bool;

  /// Notifies the session that a store call observed a dropped connection.
  fn on_session_dropped(&self);
}
