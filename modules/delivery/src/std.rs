//! Standard-library backed implementations of the core abstractions.

pub mod observer;
