use crate::core::store::StoreFault;

/// A store transaction the engine can enrol deletes in.
///
/// Callers either pass an ambient transaction into an operation or let the
/// engine create a short-lived local one through
/// [`TransactionManager`](crate::core::transaction::TransactionManager).
pub trait TransactionControl: Send + Sync + 'static {
  /// Returns `true` while the transaction can still accept work.
  fn is_alive(&self) -> bool;

  /// Commits the transaction.
  ///
  /// # Errors
  ///
  /// Returns a [`StoreFault`] when the commit fails.
  fn commit(&self) -> Result<(), StoreFault>;

  /// Rolls the transaction back.
  ///
  /// # Errors
  ///
  /// Returns a [`StoreFault`] when the rollback itself fails.
  fn rollback(&self) -> Result<(), StoreFault>;
}
