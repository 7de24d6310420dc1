//! Message identity types.

mod message_handle;
mod origin_id;

pub use message_handle::MessageHandle;
pub use origin_id::OriginId;
