//! Clock abstractions.

mod manual_clock;
mod monotonic_clock;
mod timer_instant;

pub use manual_clock::ManualClock;
pub use monotonic_clock::MonotonicClock;
pub use timer_instant::TimerInstant;
