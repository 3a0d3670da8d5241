//! This example shows the full estimation flow for a single delivery order:
//!
//! - how to train the cost model once at process start
//! - how to score randomized route candidates across known warehouses
//! - how to react to an infeasible order
//! - how to serialize the selection the way a hosting service would
//!

use routecost_core::format::write_selection;
use routecost_core::models::examples::{create_example_order, create_example_warehouses};
use routecost_core::prelude::*;
use std::io::BufWriter;

fn main() -> GenericResult<()> {
    // a fixed seed makes the run reproducible; use Environment::default() for entropy
    let environment = Environment::new_with_seed(42);

    // the model is trained once and then shared read-only by all requests
    let model = train_cost_model(&TrainingConfig::default(), &environment)?;

    // warehouses come from the hosting store, the order from the validation layer
    let warehouses = create_example_warehouses(3, &environment.random);
    let order = create_example_order();

    let selection = select_best_route(&order, &warehouses, &model, &environment);

    match &selection {
        Selection::Route { best, routes } => {
            println!(
                "best route {} with predicted cost {:.3} out of {} candidates",
                best.route.route_id,
                best.predicted_cost,
                routes.len()
            );
        }
        Selection::Infeasible { reason, .. } => println!("no feasible route: {reason:?}"),
    }

    // the hosting layer serializes the selection to its response format
    let mut writer = BufWriter::new(std::io::stdout());
    write_selection(&selection, &mut writer)
}
