#![cfg(test)]

use alloc::vec::Vec;

use lockline_utils_rs::core::time::TimerInstant;

use super::{NodeArena, POOL_CAPACITY};
use crate::core::list::{locked_node::LockedNode, test_support::message};

fn node(value: u64) -> LockedNode<crate::core::list::test_support::FakeMessage> {
  LockedNode::new(message(value), true, true, TimerInstant::from_millis(1))
}

#[test]
fn grows_only_when_no_slot_is_recycled() {
  let mut arena = NodeArena::new();
  let first = arena.insert(node(1));
  assert_eq!(arena.slot_count(), 1);

  arena.remove(first).unwrap();
  assert_eq!(arena.pool_len(), 1);

  let second = arena.insert(node(2));
  assert_eq!(second, first);
  assert_eq!(arena.slot_count(), 1);
  assert_eq!(arena.pool_len(), 0);
}

#[test]
fn pool_never_exceeds_its_capacity() {
  let mut arena = NodeArena::new();
  let indexes: Vec<_> = (0..POOL_CAPACITY as u64 + 5).map(|value| arena.insert(node(value))).collect();
  for index in indexes {
    arena.remove(index).unwrap();
  }

  assert_eq!(arena.pool_len(), POOL_CAPACITY);
  assert_eq!(arena.live(), 0);

  // Surplus indexes still come back before the arena grows.
  for value in 0..POOL_CAPACITY as u64 + 5 {
    arena.insert(node(value));
  }
  assert_eq!(arena.slot_count(), POOL_CAPACITY + 5);
}

#[test]
fn live_tracks_inserts_and_removes() {
  let mut arena = NodeArena::new();
  let a = arena.insert(node(1));
  let b = arena.insert(node(2));
  assert_eq!(arena.live(), 2);

  arena.remove(a).unwrap();
  assert_eq!(arena.live(), 1);
  assert!(arena.get(a).is_none());
  assert_eq!(arena.get(b).unwrap().handle, crate::core::list::test_support::handle_of(2));

  assert!(arena.remove(a).is_none());
  assert_eq!(arena.live(), 1);
}
