extern crate std;

use std::{string::String, thread};

use crate::core::{
  sync::ArcShared,
  timing::{AlarmHandle, AlarmListener, AlarmService, TimerDeadline},
};


/// One-shot alarm service that parks a freshly spawned OS thread per alarm.
///
/// Simple and dependency-free; suited to the low alarm volume of a delivery
/// engine, where at most one alarm per expiry chain is outstanding.
pub struct ThreadAlarmService {
  name: Option<String>,
}

impl ThreadAlarmService {
  /// Creates a service that spawns anonymous threads.
  #[must_use]
  pub const fn new() -> Self {
    Self { name: None }
  }

  /// Assigns a thread name to future alarms.
  #[must_use]
  pub fn with_name(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()) }
  }
}

impl Default for ThreadAlarmService {
  fn default() -> Self {
    Self::new()
  }
}

impl AlarmService for ThreadAlarmService {
  fn arm(&self, deadline: TimerDeadline, listener: ArcShared<dyn AlarmListener>) -> AlarmHandle {
    let handle = AlarmHandle::new();
    let watcher = handle.clone();

    let mut builder = thread::Builder::new();
    if let Some(name) = &self.name {
      builder = builder.name(name.clone());
    }

    let spawned = builder.spawn(move || {
      thread::sleep(deadline.as_duration());
      if !watcher.is_cancelled() {
        listener.alarm();
      }
    });

    // An unspawnable worker can never fire; report the alarm as dead rather
    // than invoking the listener on the caller's thread.
    if spawned.is_err() {
      handle.cancel();
    }

    handle
  }
}
