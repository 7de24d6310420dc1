use crate::{
  core::sync::{RuntimeToolbox, ToolboxMutex},
  std::sync::std_mutex_family::StdMutexFamily,
};

/// Toolbox for std environments, backed by [`StdMutexFamily`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdToolbox;

impl RuntimeToolbox for StdToolbox {
  type MutexFamily = StdMutexFamily;
}

/// Convenience alias for the default std mutex.
pub type StdMutex<T> = ToolboxMutex<T, StdToolbox>;
