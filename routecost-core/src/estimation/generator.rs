#[cfg(test)]
#[path = "../../tests/unit/estimation/generator_test.rs"]
mod generator_test;

use crate::algorithms::math::plane_distance;
use crate::estimation::TRAFFIC_RANGE;
use crate::models::{Order, RouteCandidate, Warehouse};
use crate::utils::{Float, Noise, Random};
use std::sync::Arc;

/// Amount of route candidates generated per warehouse.
pub const ROUTES_PER_WAREHOUSE: usize = 5;

/// A relative perturbation range applied to the baseline distance of every candidate.
const DISTANCE_NOISE_RANGE: (Float, Float) = (-0.2, 0.2);

/// Generates randomized route candidates for an order-warehouse pair. Produces exactly
/// `num_routes` candidates; the only side effect is random-source consumption. Numeric
/// inputs are not validated here, that is the caller's responsibility.
pub fn generate_candidates(
    order: &Order,
    warehouse: &Warehouse,
    num_routes: usize,
    random: &Arc<dyn Random + Send + Sync>,
) -> Vec<RouteCandidate> {
    let baseline_distance =
        plane_distance((warehouse.latitude, warehouse.longitude), (order.latitude, order.longitude));
    let noise = Noise::new_with_addition(DISTANCE_NOISE_RANGE, random.clone());

    (1..=num_routes)
        .map(|idx| {
            // a large negative perturbation folds back to a small positive distance
            let distance = noise.generate(baseline_distance).abs();
            let traffic = random.uniform_real(TRAFFIC_RANGE.0, TRAFFIC_RANGE.1);

            RouteCandidate {
                route_id: format!("{}_{idx}", warehouse.id),
                warehouse_id: warehouse.id.clone(),
                distance,
                time_window: order.time_window,
                traffic,
                warehouse_inventory: warehouse.inventory,
            }
        })
        .collect()
}
