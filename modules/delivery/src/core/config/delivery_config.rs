use core::time::Duration;


/// Per-session configuration of the delivery engine.
///
/// Built with chained `with_*` setters; every field has a conservative
/// default (no expiry, point-to-point, unordered, no copy on read).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
  lock_expiry:           Option<Duration>,
  reference_expiry:      Option<Duration>,
  copy_on_read:          bool,
  wait_time_granularity: Duration,
  ordered:               bool,
  pubsub:                bool,
}

impl DeliveryConfig {
  /// Creates the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      lock_expiry:           None,
      reference_expiry:      None,
      copy_on_read:          false,
      wait_time_granularity: Duration::from_millis(0),
      ordered:               false,
      pubsub:                false,
    }
  }

  /// Sets how long a message stays locked without application action.
  #[must_use]
  pub const fn with_lock_expiry(mut self, expiry: Duration) -> Self {
    self.lock_expiry = Some(expiry);
    self
  }

  /// Sets how long a cached message body is retained before release.
  #[must_use]
  pub const fn with_reference_expiry(mut self, expiry: Duration) -> Self {
    self.reference_expiry = Some(expiry);
    self
  }

  /// Requests a private body copy for stored point-to-point messages.
  #[must_use]
  pub const fn with_copy_on_read(mut self, copy: bool) -> Self {
    self.copy_on_read = copy;
    self
  }

  /// Sets the smallest wait time worth recording on a message.
  #[must_use]
  pub const fn with_wait_time_granularity(mut self, granularity: Duration) -> Self {
    self.wait_time_granularity = granularity;
    self
  }

  /// Marks the destination as requiring strictly sequential acknowledgement.
  #[must_use]
  pub const fn with_ordered(mut self, ordered: bool) -> Self {
    self.ordered = ordered;
    self
  }

  /// Marks the destination as publish/subscribe.
  #[must_use]
  pub const fn with_pubsub(mut self, pubsub: bool) -> Self {
    self.pubsub = pubsub;
    self
  }

  /// Retrieves the lock expiry, `None` meaning locks never time out.
  #[must_use]
  pub const fn lock_expiry(&self) -> Option<Duration> {
    self.lock_expiry
  }

  /// Retrieves the reference expiry, `None` meaning bodies are kept.
  #[must_use]
  pub const fn reference_expiry(&self) -> Option<Duration> {
    self.reference_expiry
  }

  /// Returns `true` when stored point-to-point bodies are copied on read.
  #[must_use]
  pub const fn copy_on_read(&self) -> bool {
    self.copy_on_read
  }

  /// Retrieves the smallest wait time worth recording.
  #[must_use]
  pub const fn wait_time_granularity(&self) -> Duration {
    self.wait_time_granularity
  }

  /// Returns `true` for ordered destinations.
  #[must_use]
  pub const fn ordered(&self) -> bool {
    self.ordered
  }

  /// Returns `true` for publish/subscribe destinations.
  #[must_use]
  pub const fn pubsub(&self) -> bool {
    self.pubsub
  }
}

impl Default for DeliveryConfig {
  fn default() -> Self {
    Self::new()
  }
}
