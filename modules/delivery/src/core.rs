//! Runtime-agnostic core of the delivery engine.

pub mod config;
pub mod consumer;
pub mod env;
pub mod error;
pub mod identity;
pub mod list;
pub mod message;
pub mod observer;
pub mod store;
pub mod tick;
pub mod transaction;
