//! Common value types shared across the domain model.

use crate::utils::Float;

/// Represents a distance in the flat coordinate plane.
pub type Distance = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Represents a delivery cost.
pub type Cost = Float;

/// Represents an amount of goods.
pub type Quantity = Float;

/// Represents a time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Start of time window.
    pub start: Timestamp,
    /// End of time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`. The caller guarantees that end is greater
    /// than start.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns a duration of the time window.
    pub fn duration(&self) -> Timestamp {
        self.end - self.start
    }
}
