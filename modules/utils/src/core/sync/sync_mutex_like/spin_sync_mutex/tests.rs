#![cfg(test)]

use crate::core::sync::{SpinSyncMutex, SyncMutexLike};

#[test]
fn guards_mutation() {
  let mutex = SpinSyncMutex::new(1_u32);

  {
    let mut guard = mutex.lock();
    *guard += 41;
  }

  assert_eq!(mutex.into_inner(), 42);
}

#[test]
fn trait_surface_matches_inherent_methods() {
  let mutex = <SpinSyncMutex<_> as SyncMutexLike<u32>>::new(5);
  assert_eq!(*SyncMutexLike::lock(&mutex), 5);
}
