#![cfg(test)]

use core::time::Duration;

use super::TimerInstant;

#[test]
fn zero_is_the_none_sentinel() {
  assert!(TimerInstant::NONE.is_none());
  assert!(!TimerInstant::from_millis(1).is_none());
}

#[test]
fn saturating_add_advances_by_millis() {
  let base = TimerInstant::from_millis(100);
  assert_eq!(base.saturating_add(Duration::from_millis(50)).as_millis(), 150);
}

#[test]
fn remaining_until_clamps_to_zero() {
  let early = TimerInstant::from_millis(10);
  let late = TimerInstant::from_millis(25);

  assert_eq!(early.remaining_until(late), Duration::from_millis(15));
  assert_eq!(late.remaining_until(early), Duration::ZERO);
}
