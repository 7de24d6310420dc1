use crate::core::observer::delivery_observer::DeliveryObserver;

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDeliveryObserver;

impl DeliveryObserver for NoopDeliveryObserver {}
