#![cfg(test)]

use alloc::format;

use super::MessageHandle;
use crate::core::identity::OriginId;

fn origin(tag: u8) -> OriginId {
  OriginId::from_bytes([tag, 0, 0, 0, 0, 0, 0, 0])
}

#[test]
fn equality_requires_both_components() {
  let a = MessageHandle::new(origin(1), 7);
  let b = MessageHandle::new(origin(1), 7);
  let c = MessageHandle::new(origin(2), 7);
  let d = MessageHandle::new(origin(1), 8);

  assert_eq!(a, b);
  assert_ne!(a, c);
  assert_ne!(a, d);
}

#[test]
fn displays_origin_and_value() {
  let handle = MessageHandle::new(origin(0xab), 42);
  assert_eq!(format!("{handle}"), "ab00000000000000:42");
}
