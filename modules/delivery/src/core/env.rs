//! Environment abstraction binding the engine to its collaborators.

mod delivery_env;
mod delivery_runtime;

pub use delivery_env::DeliveryEnv;
pub use delivery_runtime::DeliveryRuntime;
