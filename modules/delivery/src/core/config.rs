//! Engine configuration.

mod delivery_config;

pub use delivery_config::DeliveryConfig;
