use crate::core::{store::StoreFault, transaction::transaction_control::TransactionControl};

/// Factory for short-lived local transactions.
///
/// The engine creates one when a batch delete spans several stored messages
/// (or a single delete with store side effects) and no ambient transaction
/// was supplied.
pub trait TransactionManager: Send + Sync + 'static {
  /// Transaction type produced by this manager.
  type Txn: TransactionControl;

  /// Creates a new local transaction.
  ///
  /// # Errors
  ///
  /// Returns a [`StoreFault`] when the store cannot open a transaction.
  fn create_local(&self) -> Result<Self::Txn, StoreFault>;
}
