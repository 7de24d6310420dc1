#![cfg(test)]

extern crate std;

use std::{thread, time::Duration};

use super::SystemClock;
use crate::core::time::MonotonicClock;

#[test]
fn never_reports_the_sentinel() {
  let clock = SystemClock::new();
  assert!(!clock.now().is_none());
}

#[test]
fn advances_with_real_time() {
  let clock = SystemClock::new();
  let before = clock.now();

  thread::sleep(Duration::from_millis(15));

  assert!(clock.now() > before);
}
