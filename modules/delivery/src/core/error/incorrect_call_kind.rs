use core::fmt;

/// The specific API misuse behind an incorrect-call error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncorrectCallKind {
  /// No message is positioned under the cursor.
  NoMessageAvailable,
  /// The operation requires an active delivery batch and none is running.
  OutsideCallback,
  /// An ordered destination was asked to acknowledge out of sequence.
  OrderingViolated,
  /// The supplied transaction is no longer alive.
  DeadTransaction,
  /// A bulk operation was given no handles to act on.
  EmptyHandleSet,
}

impl fmt::Display for IncorrectCallKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NoMessageAvailable => write!(f, "no message is available under the cursor"),
      | Self::OutsideCallback => write!(f, "no delivery batch is in progress"),
      | Self::OrderingViolated => write!(f, "ordered destinations must be acknowledged in sequence"),
      | Self::DeadTransaction => write!(f, "the supplied transaction is not alive"),
      | Self::EmptyHandleSet => write!(f, "no message handles were supplied"),
    }
  }
}
