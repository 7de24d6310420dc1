//! Backing-store abstraction.

mod message_store;
mod store_fault;

pub use message_store::MessageStore;
pub use store_fault::StoreFault;
