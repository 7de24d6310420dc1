use lockline_utils_rs::core::sync::RuntimeToolbox;

use crate::core::{
  consumer::ConsumerAccess, message::MessageWrapper, store::MessageStore, transaction::TransactionControl,
  transaction::TransactionManager,
};

/// Type bundle the delivery engine is generic over.
///
/// One implementation per runtime wires the synchronization toolbox together
/// with the concrete message, store, consumer, and transaction types.
pub trait DeliveryEnv: Send + Sync + 'static {
  /// Synchronization toolbox selecting the list mutex.
  type Toolbox: RuntimeToolbox;
  /// Message wrapper delivered by this engine.
  type Message: MessageWrapper;
  /// Transaction type shared by the store and the transaction manager.
  type Txn: TransactionControl;
  /// Backing store.
  type Store: MessageStore<Self::Message, Self::Txn>;
  /// Owning consumer session.
  type Consumer: ConsumerAccess<Self::Txn>;
  /// Local-transaction factory.
  type TxnManager: TransactionManager<Txn = Self::Txn>;
}
