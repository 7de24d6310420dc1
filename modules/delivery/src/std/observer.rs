//! Observer implementations for standard environments.

mod tracing_delivery_observer;

pub use tracing_delivery_observer::TracingDeliveryObserver;
