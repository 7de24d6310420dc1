//! `std::sync`-backed synchronization primitives.

mod std_mutex_family;
mod std_sync_mutex;
mod std_toolbox;

pub use std_mutex_family::StdMutexFamily;
pub use std_sync_mutex::StdSyncMutex;
pub use std_toolbox::{StdMutex, StdToolbox};
