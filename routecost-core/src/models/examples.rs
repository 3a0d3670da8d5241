//! Example domain data used in examples and benchmarks.

use crate::models::common::TimeWindow;
use crate::models::{Order, Warehouse};
use crate::utils::Random;
use std::sync::Arc;

/// Creates an example order.
pub fn create_example_order() -> Order {
    Order::new(48.14, 11.58, TimeWindow::new(2., 6.), 50.)
}

/// Creates example warehouses scattered around the example order's area, with randomized
/// positions and stock levels.
pub fn create_example_warehouses(count: usize, random: &Arc<dyn Random + Send + Sync>) -> Vec<Warehouse> {
    (1..=count)
        .map(|idx| {
            Warehouse::new(
                format!("warehouse_{idx}"),
                48.137 + random.uniform_real(-0.1, 0.1),
                11.576 + random.uniform_real(-0.1, 0.1),
                random.uniform_real(0., 500.),
            )
        })
        .collect()
}
