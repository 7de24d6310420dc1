use lockline_utils_rs::core::sync::ArcShared;

use crate::core::{identity::MessageHandle, message::MessageWrapper};

/// A message handed to application code by the cursor.
pub struct DeliveredMessage<M: MessageWrapper> {
  message: ArcShared<M>,
  body:    M::Body,
}

impl<M: MessageWrapper> DeliveredMessage<M> {
  pub(crate) fn new(message: ArcShared<M>, body: M::Body) -> Self {
    Self { message, body }
  }

  /// Retrieves the handle of the delivered message.
  #[must_use]
  pub fn handle(&self) -> MessageHandle {
    self.message.handle()
  }

  /// Retrieves the message wrapper.
  #[must_use]
  pub fn message(&self) -> &ArcShared<M> {
    &self.message
  }

  /// Retrieves the materialized body.
  #[must_use]
  pub fn body(&self) -> &M::Body {
    &self.body
  }

  /// Consumes the delivery, returning the body.
  #[must_use]
  pub fn into_body(self) -> M::Body {
    self.body
  }
}
