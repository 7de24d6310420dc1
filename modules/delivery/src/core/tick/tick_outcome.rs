use core::fmt;

/// Observable state of a requested tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
  /// Neither transition has happened yet.
  Pending,
  /// A response arrived first.
  Satisfied,
  /// The timeout fired first.
  Expired,
}

impl fmt::Display for TickOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Pending => write!(f, "pending"),
      | Self::Satisfied => write!(f, "satisfied"),
      | Self::Expired => write!(f, "expired"),
    }
  }
}
