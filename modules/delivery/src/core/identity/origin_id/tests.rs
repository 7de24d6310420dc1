#![cfg(test)]

use alloc::format;

use super::OriginId;

#[test]
fn round_trips_raw_bytes() {
  let id = OriginId::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
  assert_eq!(id.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn displays_as_hex() {
  let id = OriginId::from_bytes([0xde, 0xad, 0xbe, 0xef, 0, 0, 0, 1]);
  assert_eq!(format!("{id}"), "deadbeef00000001");
}
