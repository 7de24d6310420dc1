use core::fmt;

/// Which of the two expiry chains an event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryChain {
  /// Message-lock expiry: the lock itself times out.
  Lock,
  /// Payload-reference expiry: only the cached body is released.
  Reference,
}

impl fmt::Display for ExpiryChain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Lock => write!(f, "lock"),
      | Self::Reference => write!(f, "reference"),
    }
  }
}
