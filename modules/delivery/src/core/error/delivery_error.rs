use alloc::vec::Vec;
use core::fmt;

use crate::core::{
  consumer::SessionFault, error::incorrect_call_kind::IncorrectCallKind, identity::MessageHandle, store::StoreFault,
};


/// Failure surfaced by a delivery-engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryError {
  /// The caller misused the API; never retried.
  IncorrectCall(IncorrectCallKind),
  /// One or more messages were no longer locked. Bulk operations aggregate
  /// every affected handle into a single error after applying the rest.
  NotLocked(Vec<MessageHandle>),
  /// The store or a transaction failed in a way that affects delivery.
  Resource(StoreFault),
  /// The owning session has been closed.
  SessionUnavailable,
  /// The owning session's connection died.
  SessionDropped,
}

impl DeliveryError {
  /// Creates an incorrect-call error of the given kind.
  #[must_use]
  pub const fn incorrect_call(kind: IncorrectCallKind) -> Self {
    Self::IncorrectCall(kind)
  }

  /// Creates a not-locked error naming the affected handles.
  #[must_use]
  pub const fn not_locked(handles: Vec<MessageHandle>) -> Self {
    Self::NotLocked(handles)
  }

  /// Creates a resource error from a store fault.
  #[must_use]
  pub const fn resource(fault: StoreFault) -> Self {
    Self::Resource(fault)
  }
}

impl From<SessionFault> for DeliveryError {
  fn from(fault: SessionFault) -> Self {
    match fault {
      | SessionFault::Unavailable => Self::SessionUnavailable,
      | SessionFault::Dropped => Self::SessionDropped,
    }
  }
}

impl fmt::Display for DeliveryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::IncorrectCall(kind) => write!(f, "incorrect call: {kind}"),
      | Self::NotLocked(handles) => {
        write!(f, "message(s) not locked:")?;
        for handle in handles {
          write!(f, " {handle}")?;
        }
        Ok(())
      },
      | Self::Resource(fault) => write!(f, "resource failure: {fault}"),
      | Self::SessionUnavailable => write!(f, "consumer session is unavailable"),
      | Self::SessionDropped => write!(f, "consumer session was dropped"),
    }
  }
}
