#![cfg(test)]

use lockline_utils_rs::core::{
  time::TimerInstant,
  timing::{AlarmHandle, TimerDeadline},
};

use super::RequestTick;
use crate::core::tick::TickOutcome;

fn tick() -> RequestTick<u64> {
  RequestTick::new(9, TimerDeadline::from_millis(200), TimerInstant::from_millis(1))
}

#[test]
fn satisfy_wins_over_a_later_expire() {
  let tick = tick();
  assert!(tick.satisfy(42));
  assert!(!tick.expire(false));
  assert_eq!(tick.outcome(), TickOutcome::Satisfied);
  assert_eq!(tick.take_payload(), Some(42));
}

#[test]
fn expire_wins_over_a_later_satisfy() {
  let tick = tick();
  assert!(tick.expire(false));
  assert!(!tick.satisfy(42));
  assert_eq!(tick.outcome(), TickOutcome::Expired);
  assert_eq!(tick.take_payload(), None);
}

#[test]
fn each_transition_happens_at_most_once() {
  let tick = tick();
  assert!(tick.expire(false));
  assert!(!tick.expire(false));
}

#[test]
fn satisfy_cancels_the_attached_alarm() {
  let tick = tick();
  let alarm = AlarmHandle::new();
  tick.attach_alarm(alarm.clone());

  assert!(tick.satisfy(7));
  assert!(alarm.is_cancelled());
}

#[test]
fn owner_initiated_expiry_cancels_the_alarm_on_request() {
  let tick = tick();
  let alarm = AlarmHandle::new();
  tick.attach_alarm(alarm.clone());

  assert!(tick.expire(true));
  assert!(alarm.is_cancelled());
}

#[test]
fn alarm_driven_expiry_leaves_the_handle_alone() {
  let tick = tick();
  let alarm = AlarmHandle::new();
  tick.attach_alarm(alarm.clone());

  assert!(tick.expire(false));
  assert!(!alarm.is_cancelled());
}

#[test]
fn accessors_report_the_request() {
  let tick = tick();
  assert_eq!(tick.tick(), 9);
  assert_eq!(tick.timeout(), TimerDeadline::from_millis(200));
  assert_eq!(tick.request_time(), TimerInstant::from_millis(1));
  assert_eq!(tick.outcome(), TickOutcome::Pending);
}
