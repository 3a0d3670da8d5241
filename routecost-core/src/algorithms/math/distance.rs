#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates Euclidean distance between two points in the (latitude, longitude) plane.
/// This is a flat-earth approximation, not a geodesic one: only relative ranking of routes
/// for the same order matters, so absolute geographic accuracy is not required.
pub fn plane_distance((lat1, lon1): (Float, Float), (lat2, lon2): (Float, Float)) -> Float {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt()
}
