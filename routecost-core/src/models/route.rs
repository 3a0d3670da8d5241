use crate::models::common::{Cost, Distance, Quantity, TimeWindow};
use crate::utils::Float;

/// Represents one randomized route hypothesis for an order-warehouse pair. Candidates are
/// generated per request and are not persisted.
#[derive(Clone, Debug)]
pub struct RouteCandidate {
    /// A route id, unique within a generation batch.
    pub route_id: String,
    /// An id of the warehouse the route starts from.
    pub warehouse_id: String,
    /// A randomized route distance.
    pub distance: Distance,
    /// The order's delivery time window, copied verbatim.
    pub time_window: TimeWindow,
    /// A traffic multiplier in the [1.0, 3.0) range.
    pub traffic: Float,
    /// The warehouse's stock level, copied from the snapshot.
    pub warehouse_inventory: Quantity,
}

/// A route candidate together with its predicted delivery cost.
#[derive(Clone, Debug)]
pub struct ScoredRoute {
    /// A route candidate.
    pub route: RouteCandidate,
    /// A cost predicted by the fitted model. Can be negative in extrapolated regions.
    pub predicted_cost: Cost,
}
