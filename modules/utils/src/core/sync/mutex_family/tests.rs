#![cfg(test)]

use crate::core::sync::{SpinMutexFamily, SyncMutexFamily, SyncMutexLike};

#[test]
fn spin_family_produces_working_mutexes() {
  let mutex = SpinMutexFamily::create(3_u64);

  {
    let mut guard = mutex.lock();
    *guard *= 2;
  }

  assert_eq!(mutex.into_inner(), 6);
}
