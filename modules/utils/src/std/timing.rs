//! Thread-backed alarm service.

mod thread_alarm_service;

pub use thread_alarm_service::ThreadAlarmService;
