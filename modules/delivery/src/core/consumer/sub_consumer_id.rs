
/// Identifier of a bifurcated sub-consumer.
///
/// A sub-consumer is a secondary handle allowed to act on messages locked by
/// the primary session; a node whose owner is `None` belongs to the primary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubConsumerId(u64);

impl SubConsumerId {
  /// Creates an identifier from its raw value.
  #[must_use]
  #[inline]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Retrieves the raw value.
  #[must_use]
  #[inline]
  pub const fn value(self) -> u64 {
    self.0
  }
}
