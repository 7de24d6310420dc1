use core::fmt;

#[cfg(test)]
mod tests;

/// Identifier of the broker node a message originated from.
///
/// Eight opaque bytes; together with the per-origin message value it uniquely
/// identifies a message within a delivery list.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OriginId([u8; 8]);

impl OriginId {
  /// Creates an origin identifier from its raw bytes.
  #[must_use]
  #[inline]
  pub const fn from_bytes(bytes: [u8; 8]) -> Self {
    Self(bytes)
  }

  /// Retrieves the raw bytes.
  #[must_use]
  #[inline]
  pub const fn as_bytes(&self) -> &[u8; 8] {
    &self.0
  }
}

impl fmt::Debug for OriginId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "OriginId(")?;
    for byte in &self.0 {
      write!(f, "{byte:02x}")?;
    }
    write!(f, ")")
  }
}

impl fmt::Display for OriginId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in &self.0 {
      write!(f, "{byte:02x}")?;
    }
    Ok(())
  }
}
