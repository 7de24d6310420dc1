use alloc::vec::Vec;

use crate::core::{
  list::{locked_node::LockedNode, node_index::NodeIndex},
  message::MessageWrapper,
};

#[cfg(test)]
mod tests;

/// Maximum number of vacated slots kept in the preferred free stack.
pub const POOL_CAPACITY: usize = 20;

/// Slab-style arena holding the list's nodes.
///
/// Vacated slot indexes are recycled through a free stack bounded at
/// [`POOL_CAPACITY`]; overflow goes to an uncapped spare stack so no slot is
/// ever leaked, but only the bounded stack counts as the pool.
pub(crate) struct NodeArena<M: MessageWrapper> {
  slots: Vec<Option<LockedNode<M>>>,
  free:  Vec<NodeIndex>,
  spare: Vec<NodeIndex>,
  live:  usize,
}

impl<M: MessageWrapper> NodeArena<M> {
  pub(crate) const fn new() -> Self {
    Self { slots: Vec::new(), free: Vec::new(), spare: Vec::new(), live: 0 }
  }

  /// Places a node into a recycled slot when one exists, growing otherwise.
  pub(crate) fn insert(&mut self, node: LockedNode<M>) -> NodeIndex {
    self.live += 1;
    if let Some(index) = self.free.pop().or_else(|| self.spare.pop()) {
      self.slots[index.raw()] = Some(node);
      return index;
    }
    let index = NodeIndex::new(self.slots.len());
    self.slots.push(Some(node));
    index
  }

  /// Vacates a slot, returning its node and pooling the index.
  pub(crate) fn remove(&mut self, index: NodeIndex) -> Option<LockedNode<M>> {
    let node = self.slots.get_mut(index.raw())?.take()?;
    self.live -= 1;
    if self.free.len() < POOL_CAPACITY {
      self.free.push(index);
    } else {
      self.spare.push(index);
    }
    Some(node)
  }

  pub(crate) fn get(&self, index: NodeIndex) -> Option<&LockedNode<M>> {
    self.slots.get(index.raw())?.as_ref()
  }

  pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut LockedNode<M>> {
    self.slots.get_mut(index.raw())?.as_mut()
  }

  /// Number of live nodes.
  pub(crate) const fn live(&self) -> usize {
    self.live
  }

  /// Number of indexes held by the bounded pool.
  pub(crate) fn pool_len(&self) -> usize {
    self.free.len()
  }

  /// Total slots ever allocated, pooled or live.
  pub(crate) fn slot_count(&self) -> usize {
    self.slots.len()
  }
}
