//! Synchronization primitives and the runtime toolbox.

mod arc_shared;
mod mutex_family;
mod runtime_toolbox;
mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use mutex_family::{SpinMutexFamily, SyncMutexFamily};
pub use runtime_toolbox::{NoStdMutex, NoStdToolbox, RuntimeToolbox, ToolboxMutex};
pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};
