#[cfg(test)]
#[path = "../../tests/unit/estimation/synthetic_test.rs"]
mod synthetic_test;

use crate::estimation::TRAFFIC_RANGE;
use crate::models::common::{Cost, Quantity, Timestamp};
use crate::utils::{Float, Random};

/// A cost penalty applied when a warehouse cannot cover the requested quantity. The penalty
/// is large enough to dominate every other cost term, which teaches the model to strongly
/// disfavor warehouses with insufficient stock. It doubles as the decision threshold: any
/// predicted cost at or above this value is treated as effectively infeasible.
pub const INVENTORY_SHORTFALL_PENALTY: Cost = 999_999.;

/// Scales the penalty which grows as the available delivery window shrinks toward zero.
const TIGHT_WINDOW_FACTOR: Float = 10.;

/// A small linear discount per unit of stock which rewards well-stocked warehouses.
const STOCK_DISCOUNT_RATE: Float = 0.02;

const DISTANCE_RANGE: (Float, Float) = (1., 100.);
const WINDOW_START_RANGE: (Float, Float) = (0., 8.);
const WINDOW_SPAN_RANGE: (Float, Float) = (0.5, 10.);
const INVENTORY_RANGE: (Float, Float) = (0., 500.);
const QUANTITY_RANGE: (Float, Float) = (1., 200.);

/// Computes the cost label the regression model learns to approximate. Arguments follow the
/// model's positional feature order. The caller guarantees a positive window span; the floor
/// at zero prevents negative costs.
pub fn ground_truth_cost(
    distance: Float,
    time_window_start: Timestamp,
    time_window_end: Timestamp,
    traffic: Float,
    warehouse_inventory: Quantity,
    requested_quantity: Quantity,
) -> Cost {
    let base_cost = distance;
    let traffic_cost = distance * traffic;

    let shortfall_penalty =
        if warehouse_inventory < requested_quantity { INVENTORY_SHORTFALL_PENALTY } else { 0. };

    let available_time = time_window_end - time_window_start;
    let window_penalty = TIGHT_WINDOW_FACTOR * traffic * (1. / available_time);

    let stock_discount = STOCK_DISCOUNT_RATE * warehouse_inventory;

    (base_cost + traffic_cost + window_penalty + shortfall_penalty - stock_discount).max(0.)
}

/// Draws labeled synthetic examples for model training. Returns feature rows in the model's
/// positional order together with their cost labels. Draws happen sequentially from the given
/// random source, so a fixed seed reproduces the exact same data.
pub fn generate_training_data(
    sample_count: usize,
    random: &(dyn Random + Send + Sync),
) -> (Vec<Vec<Float>>, Vec<Cost>) {
    (0..sample_count)
        .map(|_| {
            let distance = random.uniform_real(DISTANCE_RANGE.0, DISTANCE_RANGE.1);
            let time_window_start = random.uniform_real(WINDOW_START_RANGE.0, WINDOW_START_RANGE.1);
            // the span draw guarantees that window end is greater than its start
            let time_window_end =
                time_window_start + random.uniform_real(WINDOW_SPAN_RANGE.0, WINDOW_SPAN_RANGE.1);
            let traffic = random.uniform_real(TRAFFIC_RANGE.0, TRAFFIC_RANGE.1);
            let warehouse_inventory = random.uniform_real(INVENTORY_RANGE.0, INVENTORY_RANGE.1);
            let requested_quantity = random.uniform_real(QUANTITY_RANGE.0, QUANTITY_RANGE.1);

            let label = ground_truth_cost(
                distance,
                time_window_start,
                time_window_end,
                traffic,
                warehouse_inventory,
                requested_quantity,
            );

            (
                vec![distance, time_window_start, time_window_end, traffic, warehouse_inventory, requested_quantity],
                label,
            )
        })
        .unzip()
}
