//! Process-clock implementations.

mod system_clock;

pub use system_clock::SystemClock;
