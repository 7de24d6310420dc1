//! Message wrapper abstraction.

mod message_wrapper;

pub use message_wrapper::MessageWrapper;
