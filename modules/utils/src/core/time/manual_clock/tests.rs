#![cfg(test)]

use core::time::Duration;

use super::ManualClock;
use crate::core::time::MonotonicClock;

#[test]
fn starts_past_the_sentinel() {
  let clock = ManualClock::new();
  assert!(!clock.now().is_none());
}

#[test]
fn advance_moves_time_forward() {
  let clock = ManualClock::new();
  let before = clock.now();

  clock.advance(Duration::from_millis(250));

  assert_eq!(clock.now().as_millis(), before.as_millis() + 250);
}
