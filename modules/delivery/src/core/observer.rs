//! Observability hooks.

mod delivery_observer;
mod expiry_chain;
mod noop_delivery_observer;

pub use delivery_observer::DeliveryObserver;
pub use expiry_chain::ExpiryChain;
pub use noop_delivery_observer::NoopDeliveryObserver;
