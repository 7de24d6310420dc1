//! Runtime-agnostic primitives.

pub mod sync;
pub mod time;
pub mod timing;
