use lockline_utils_rs::core::{
  sync::NoStdMutex,
  time::TimerInstant,
  timing::{AlarmHandle, TimerDeadline},
};
use portable_atomic::{AtomicU8, Ordering};

use crate::core::tick::tick_outcome::TickOutcome;

#[cfg(test)]
mod tests;

const PENDING: u8 = 0;
const SATISFIED: u8 = 1;
const EXPIRED: u8 = 2;

/// One outstanding remote-get request at a position in a delivery stream.
///
/// Two threads race to finish it: a response handler calling
/// [`RequestTick::satisfy`] and the timeout alarm calling
/// [`RequestTick::expire`]. The first transition wins; the loser observes
/// `false` and must not act. The compare-and-swap makes this safe without
/// any external locking, though the owner still serializes *consuming* the
/// outcome.
pub struct RequestTick<P: Send + 'static> {
  tick:         u64,
  timeout:      TimerDeadline,
  request_time: TimerInstant,
  state:        AtomicU8,
  payload:      NoStdMutex<Option<P>>,
  alarm:        NoStdMutex<Option<AlarmHandle>>,
}

impl<P: Send + 'static> RequestTick<P> {
  /// Creates a pending tick.
  #[must_use]
  pub const fn new(tick: u64, timeout: TimerDeadline, request_time: TimerInstant) -> Self {
    Self {
      tick,
      timeout,
      request_time,
      state: AtomicU8::new(PENDING),
      payload: NoStdMutex::new(None),
      alarm: NoStdMutex::new(None),
    }
  }

  /// Attaches the timeout alarm so a winning response can cancel it.
  pub fn attach_alarm(&self, handle: AlarmHandle) {
    *self.alarm.lock() = Some(handle);
  }

  /// Position identifier in the delivery stream.
  #[must_use]
  pub const fn tick(&self) -> u64 {
    self.tick
  }

  /// The timeout this tick was requested with.
  #[must_use]
  pub const fn timeout(&self) -> TimerDeadline {
    self.timeout
  }

  /// When the request was issued.
  #[must_use]
  pub const fn request_time(&self) -> TimerInstant {
    self.request_time
  }

  /// Current outcome.
  #[must_use]
  pub fn outcome(&self) -> TickOutcome {
    match self.state.load(Ordering::SeqCst) {
      | SATISFIED => TickOutcome::Satisfied,
      | EXPIRED => TickOutcome::Expired,
      | _ => TickOutcome::Pending,
    }
  }

  /// Completes the tick with a response payload.
  ///
  /// Returns `true` when this call won the transition; the timeout alarm is
  /// then cancelled (best-effort) and the payload stored. Returns `false`
  /// when the tick had already expired, in which case the payload is
  /// dropped.
  pub fn satisfy(&self, payload: P) -> bool {
    if self.state.compare_exchange(PENDING, SATISFIED, Ordering::SeqCst, Ordering::SeqCst).is_err() {
      return false;
    }
    if let Some(alarm) = self.alarm.lock().take() {
      alarm.cancel();
    }
    *self.payload.lock() = Some(payload);
    true
  }

  /// Expires the tick.
  ///
  /// Returns `true` when this call won the transition. With `cancel_alarm`
  /// set, the attached alarm handle is cancelled too (used when expiry is
  /// initiated by the owner rather than the alarm itself firing).
  pub fn expire(&self, cancel_alarm: bool) -> bool {
    if self.state.compare_exchange(PENDING, EXPIRED, Ordering::SeqCst, Ordering::SeqCst).is_err() {
      return false;
    }
    if cancel_alarm {
      if let Some(alarm) = self.alarm.lock().take() {
        alarm.cancel();
      }
    }
    true
  }

  /// Takes the stored payload; present only after a winning `satisfy`.
  #[must_use]
  pub fn take_payload(&self) -> Option<P> {
    self.payload.lock().take()
  }
}
