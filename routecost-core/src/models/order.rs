use crate::models::common::{Quantity, TimeWindow};
use crate::utils::Float;

/// Represents a delivery order: a drop-off location, a service time window and a requested
/// amount of goods. An order is created once per request by the hosting validation layer
/// (window end greater than start, quantity at least one) and is read-only within the core.
#[derive(Clone, Debug)]
pub struct Order {
    /// Latitude of the drop-off location.
    pub latitude: Float,
    /// Longitude of the drop-off location.
    pub longitude: Float,
    /// A time window in which the delivery has to happen.
    pub time_window: TimeWindow,
    /// Requested amount of goods.
    pub quantity: Quantity,
}

impl Order {
    /// Creates a new instance of `Order`.
    pub fn new(latitude: Float, longitude: Float, time_window: TimeWindow, quantity: Quantity) -> Self {
        Self { latitude, longitude, time_window, quantity }
    }
}
