//! Owning consumer session abstraction.

mod consumer_access;
mod session_fault;
mod sub_consumer_id;

pub use consumer_access::ConsumerAccess;
pub use session_fault::SessionFault;
pub use sub_consumer_id::SubConsumerId;
