//! Error taxonomy of the delivery engine.

mod delivery_error;
mod incorrect_call_kind;

pub use delivery_error::DeliveryError;
pub use incorrect_call_kind::IncorrectCallKind;
