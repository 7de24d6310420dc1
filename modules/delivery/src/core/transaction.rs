//! Transaction abstractions.

mod transaction_control;
mod transaction_manager;

pub use transaction_control::TransactionControl;
pub use transaction_manager::TransactionManager;
