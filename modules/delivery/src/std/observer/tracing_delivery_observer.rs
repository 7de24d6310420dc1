//! `tracing`-backed delivery observer for standard environments.

extern crate std;


use alloc::string::ToString;

use lockline_utils_rs::core::timing::TimerDeadline;
use tracing::{Level, event};

use crate::core::{
  identity::MessageHandle,
  observer::{DeliveryObserver, ExpiryChain},
  store::StoreFault,
};

/// Delivery observer that forwards engine events to the `tracing` crate.
///
/// Expiries and swallowed store faults are emitted at `WARN`, armed alarms
/// at `TRACE`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDeliveryObserver;

impl TracingDeliveryObserver {
  /// Default target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "lockline::delivery";

  /// Creates the observer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl DeliveryObserver for TracingDeliveryObserver {
  fn lock_expired(&self, handle: MessageHandle) {
    let handle = handle.to_string();
    event!(
      target: TracingDeliveryObserver::DEFAULT_TARGET,
      Level::WARN,
      handle = handle.as_str(),
      "message lock expired"
    );
  }

  fn reference_expired(&self, handle: MessageHandle) {
    let handle = handle.to_string();
    event!(
      target: TracingDeliveryObserver::DEFAULT_TARGET,
      Level::WARN,
      handle = handle.as_str(),
      "cached message body released"
    );
  }

  fn alarm_armed(&self, chain: ExpiryChain, deadline: TimerDeadline) {
    let chain = chain.to_string();
    let deadline_millis = deadline.as_duration().as_millis() as u64;
    event!(
      target: TracingDeliveryObserver::DEFAULT_TARGET,
      Level::TRACE,
      chain = chain.as_str(),
      deadline_millis = deadline_millis,
      "expiry alarm armed"
    );
  }

  fn store_fault_swallowed(&self, fault: &StoreFault) {
    let fault = fault.to_string();
    event!(
      target: TracingDeliveryObserver::DEFAULT_TARGET,
      Level::WARN,
      fault = fault.as_str(),
      "best-effort store call failed"
    );
  }
}
