use crate::core::{identity::MessageHandle, store::StoreFault};

/// A delivered message as seen by the engine.
///
/// Implementations wrap whatever the backing store hands out: the body is
/// fetched lazily (it may live only in the store until first read) and can be
/// released again under memory pressure. All methods take `&self`; wrappers
/// are shared between the list and its deferred side-effect batches, so any
/// mutable bookkeeping uses interior mutability.
pub trait MessageWrapper: Send + Sync + 'static {
  /// Materialized message body handed to application code.
  type Body: Clone + Send + 'static;

  /// Retrieves the unique handle of this message.
  fn handle(&self) -> MessageHandle;

  /// Materializes the message body.
  ///
  /// `copy` requests a private copy: publish/subscribe delivery always copies
  /// because the stored message is shared by every subscriber, and
  /// point-to-point delivery copies when the message stays on a durable
  /// stream the consumer may mutate.
  ///
  /// # Errors
  ///
  /// Returns a [`StoreFault`] when the body cannot be fetched from the store.
  fn fetch_body(&self, copy: bool) -> Result<Self::Body, StoreFault>;

  /// Releases the in-memory body reference, keeping the message deliverable.
  ///
  /// # Errors
  ///
  /// Returns a [`StoreFault`] when the release fails; callers treat this as
  /// best-effort since only a memory optimization is lost.
  fn release_body(&self) -> Result<(), StoreFault>;

  /// Best guess at how often this message has been redelivered.
  fn redelivery_estimate(&self) -> u32;

  /// Records how long the message waited before delivery, in milliseconds.
  fn record_wait_time(&self, waited_millis: u64);

  /// Returns `true` when the message carries a delivery-report request.
  ///
  /// Report processing needs the full message at expiry time, so such
  /// messages never take part in reference expiry.
  fn has_report_request(&self) -> bool;

  /// Returns `true` when deleting this message triggers additional store
  /// work (report generation, remote acknowledgement), which forces batch
  /// deletes onto a real transaction.
  fn delete_has_side_effects(&self) -> bool;
}
