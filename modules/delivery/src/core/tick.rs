//! The requested-tick state machine for asynchronous remote-get requests.

mod request_tick;
mod tick_outcome;

pub use request_tick::RequestTick;
pub use tick_outcome::TickOutcome;
