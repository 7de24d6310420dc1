/// Index of a slot in the node arena.
///
/// Indexes stay stable for the lifetime of a node; a vacated index is only
/// handed out again by the arena's free stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
  pub(crate) const fn new(raw: usize) -> Self {
    Self(raw)
  }

  pub(crate) const fn raw(self) -> usize {
    self.0
  }
}
