#[cfg(test)]
#[path = "../../tests/unit/estimation/predictor_test.rs"]
mod predictor_test;

use crate::algorithms::math::LinearRegression;
use crate::models::common::Cost;
use crate::models::{Order, RouteCandidate};
use crate::utils::Float;

/// Amount of features the cost model consumes.
pub const FEATURE_DIMENSION: usize = 6;

/// An immutable cost model fitted on synthetic data. The model is built once at host start,
/// is safely shared by arbitrarily many concurrent selections without locking, and is only
/// ever replaced as a whole, never mutated in place.
pub struct CostModel {
    regression: LinearRegression,
}

impl CostModel {
    /// Creates a new instance of `CostModel` around a fitted regression.
    pub(crate) fn new(regression: LinearRegression) -> Self {
        Self { regression }
    }

    /// Predicts a delivery cost for the route candidate of the given order. Evaluation is a
    /// pure linear combination: it never fails for well-formed numeric inputs, and the result
    /// can be negative in extrapolated regions, so callers must not assume non-negativity.
    pub fn predict_cost(&self, route: &RouteCandidate, order: &Order) -> Cost {
        self.regression.predict(&feature_vector(route, order))
    }

    /// Returns the underlying fitted regression.
    pub fn regression(&self) -> &LinearRegression {
        &self.regression
    }
}

/// Builds the model input for an order-route pair. The model has no feature names, only
/// positional semantics: the order here must match the synthetic training data exactly.
fn feature_vector(route: &RouteCandidate, order: &Order) -> [Float; FEATURE_DIMENSION] {
    [
        route.distance,
        route.time_window.start,
        route.time_window.end,
        route.traffic,
        route.warehouse_inventory,
        order.quantity,
    ]
}
