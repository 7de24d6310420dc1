//! One-shot alarm abstractions.

mod alarm_handle;
mod alarm_listener;
mod alarm_service;
mod timer_deadline;

pub use alarm_handle::AlarmHandle;
pub use alarm_listener::AlarmListener;
pub use alarm_service::AlarmService;
pub use timer_deadline::TimerDeadline;
