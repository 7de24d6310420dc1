#![cfg(test)]

use crate::core::sync::{NoStdMutex, SyncMutexFamily, SyncMutexLike};

#[test]
fn no_std_toolbox_selects_spin_mutexes() {
  let mutex: NoStdMutex<u8> = <crate::core::sync::SpinMutexFamily as SyncMutexFamily>::create(9);
  assert_eq!(*mutex.lock(), 9);
}
