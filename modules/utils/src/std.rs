//! Standard-library backed implementations of the core abstractions.

pub mod sync;
pub mod time;
pub mod timing;
