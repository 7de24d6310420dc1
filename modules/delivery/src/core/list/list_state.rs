use alloc::vec;
use core::time::Duration;

use crate::core::{
  error::{DeliveryError, IncorrectCallKind},
  list::{locked_node::LockedNode, node_arena::NodeArena, node_index::NodeIndex},
  message::MessageWrapper,
};


/// Everything guarded by the list mutex.
///
/// FIFO order is never disturbed, which keeps both expiry chains sorted by
/// deadline: every node in a chain received the same configured timeout at
/// insertion, so a single next-to-expire pointer per chain suffices.
pub(crate) struct ListState<M: MessageWrapper> {
  pub(crate) arena:                 NodeArena<M>,
  pub(crate) head:                  Option<NodeIndex>,
  pub(crate) tail:                  Option<NodeIndex>,
  /// Last node handed to the application; `None` = before the start.
  pub(crate) cursor:                Option<NodeIndex>,
  /// Cursor position at the start of the current delivery batch.
  pub(crate) callback_entry:        Option<NodeIndex>,
  /// At most one node provisionally unlocked mid-scan.
  pub(crate) current_unlocked:      Option<NodeIndex>,
  pub(crate) next_lock_expiry:      Option<NodeIndex>,
  pub(crate) next_reference_expiry: Option<NodeIndex>,
  pub(crate) lock_alarm_armed:      bool,
  pub(crate) reference_alarm_armed: bool,
  pub(crate) end_reached:           bool,
  pub(crate) available:             bool,
  pub(crate) valid_callback:        bool,
  pub(crate) lock_expiry:           Option<Duration>,
  pub(crate) reference_expiry:      Option<Duration>,
}

impl<M: MessageWrapper> ListState<M> {
  pub(crate) const fn new(lock_expiry: Option<Duration>, reference_expiry: Option<Duration>) -> Self {
    Self {
      arena: NodeArena::new(),
      head: None,
      tail: None,
      cursor: None,
      callback_entry: None,
      current_unlocked: None,
      next_lock_expiry: None,
      next_reference_expiry: None,
      lock_alarm_armed: false,
      reference_alarm_armed: false,
      end_reached: false,
      available: false,
      valid_callback: false,
      lock_expiry,
      reference_expiry,
    }
  }

  pub(crate) fn node(&self, index: NodeIndex) -> Option<&LockedNode<M>> {
    self.arena.get(index)
  }

  pub(crate) fn node_mut(&mut self, index: NodeIndex) -> Option<&mut LockedNode<M>> {
    self.arena.get_mut(index)
  }

  /// Links a node at the tail, preserving insertion order.
  pub(crate) fn push_back(&mut self, mut node: LockedNode<M>) -> NodeIndex {
    node.prev = self.tail;
    node.next = None;
    let index = self.arena.insert(node);
    if let Some(tail) = self.tail {
      if let Some(tail_node) = self.arena.get_mut(tail) {
        tail_node.next = Some(index);
      }
    }
    self.tail = Some(index);
    if self.head.is_none() {
      self.head = Some(index);
    }
    index
  }

  pub(crate) fn next_of(&self, index: NodeIndex) -> Option<NodeIndex> {
    self.node(index).and_then(|node| node.next)
  }

  /// The node the cursor would move to next.
  pub(crate) fn after_cursor(&self) -> Option<NodeIndex> {
    match self.cursor {
      | Some(cursor) => self.next_of(cursor),
      | None => self.head,
    }
  }

  /// Unlinks a node, repairing every pointer that referenced it, and pools
  /// its slot. Each expiry pointer advances in chain order, skipping nodes
  /// without that chain's deadline.
  pub(crate) fn unlink(&mut self, index: NodeIndex) -> Option<LockedNode<M>> {
    let (prev, next) = {
      let node = self.arena.get(index)?;
      (node.prev, node.next)
    };
    if self.head == Some(index) {
      self.head = next;
    }
    if self.tail == Some(index) {
      self.tail = prev;
    }
    if self.cursor == Some(index) {
      self.cursor = prev;
    }
    if self.callback_entry == Some(index) {
      self.callback_entry = prev;
    }
    if self.current_unlocked == Some(index) {
      self.current_unlocked = None;
    }
    if self.next_lock_expiry == Some(index) {
      self.next_lock_expiry = self.first_lock_expiry_from(next);
    }
    if self.next_reference_expiry == Some(index) {
      self.next_reference_expiry = self.first_reference_expiry_from(next);
    }
    if let Some(prev) = prev {
      if let Some(prev_node) = self.arena.get_mut(prev) {
        prev_node.next = next;
      }
    }
    if let Some(next) = next {
      if let Some(next_node) = self.arena.get_mut(next) {
        next_node.prev = prev;
      }
    }
    self.arena.remove(index)
  }

  /// First node at or after `start` with a lock-expiry deadline.
  pub(crate) fn first_lock_expiry_from(&self, start: Option<NodeIndex>) -> Option<NodeIndex> {
    let mut walk = start;
    while let Some(index) = walk {
      let node = self.node(index)?;
      if !node.lock_expiry_at.is_none() {
        return Some(index);
      }
      walk = node.next;
    }
    None
  }

  /// First node at or after `start` with a reference-expiry deadline.
  pub(crate) fn first_reference_expiry_from(&self, start: Option<NodeIndex>) -> Option<NodeIndex> {
    let mut walk = start;
    while let Some(index) = walk {
      let node = self.node(index)?;
      if !node.reference_expiry_at.is_none() {
        return Some(index);
      }
      walk = node.next;
    }
    None
  }

  /// Availability guard for operations acting on the node under the cursor.
  ///
  /// With `consume` set, success clears availability so a stale node can
  /// never be acted on twice; an expired lock always clears availability
  /// before reporting the node as no longer locked.
  pub(crate) fn check_current_available(&mut self, ordered: bool, consume: bool) -> Result<NodeIndex, DeliveryError> {
    if !self.available {
      return Err(DeliveryError::incorrect_call(IncorrectCallKind::NoMessageAvailable));
    }
    let Some(index) = self.cursor else {
      return Err(DeliveryError::incorrect_call(IncorrectCallKind::NoMessageAvailable));
    };
    if ordered && self.head != Some(index) {
      return Err(DeliveryError::incorrect_call(IncorrectCallKind::OrderingViolated));
    }
    let Some(node) = self.node(index) else {
      return Err(DeliveryError::incorrect_call(IncorrectCallKind::NoMessageAvailable));
    };
    if node.lock_expired {
      let handle = node.handle;
      self.available = false;
      return Err(DeliveryError::not_locked(vec![handle]));
    }
    if consume {
      self.available = false;
    }
    Ok(index)
  }

  /// Number of nodes after the cursor.
  pub(crate) fn count_after_cursor(&self) -> usize {
    let mut count = 0;
    let mut walk = self.after_cursor();
    while let Some(index) = walk {
      count += 1;
      walk = self.next_of(index);
    }
    count
  }
}
