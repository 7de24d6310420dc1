use core::fmt;

/// Failure of the owning consumer session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionFault {
  /// The session has been closed in an orderly fashion.
  Unavailable,
  /// The session's connection died underneath it.
  Dropped,
}

impl fmt::Display for SessionFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Unavailable => write!(f, "consumer session is unavailable"),
      | Self::Dropped => write!(f, "consumer session was dropped"),
    }
  }
}
