/// What a bulk handle operation should do with each matched message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleAction {
  /// Mark the message read: its lock stops expiring and, for a sub-consumer,
  /// delivery ownership transfers to it.
  Read,
  /// Return the message to general availability.
  Unlock,
  /// Delete the message.
  Delete,
}
