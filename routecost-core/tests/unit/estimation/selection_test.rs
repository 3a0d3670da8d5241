use super::*;
use crate::algorithms::math::LinearRegression;
use crate::estimation::{train_cost_model, TrainingConfig};
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::helpers::utils::{create_test_environment_with_random, create_test_environment_with_seed};
use rustc_hash::FxHashMap;
use std::sync::Arc;

fn create_constant_cost_model(cost: f64) -> CostModel {
    CostModel::new(LinearRegression::new(vec![0.; 6], cost))
}

fn create_distance_cost_model() -> CostModel {
    CostModel::new(LinearRegression::new(vec![1., 0., 0., 0., 0., 0.], 0.))
}

#[test]
fn can_short_circuit_when_all_warehouses_are_short() {
    // an exhausted fake random proves that no candidate generation happens
    let environment = create_test_environment_with_random(Arc::new(FakeRandom::new(vec![], vec![])));
    let order = create_test_order_with_quantity(50.);
    let warehouses = vec![create_test_warehouse("w1", 10.), create_test_warehouse("w2", 49.9)];

    let selection = select_best_route(&order, &warehouses, &create_constant_cost_model(5.), &environment);

    assert!(matches!(
        selection,
        Selection::Infeasible { reason: Infeasibility::InsufficientInventory, .. }
    ));
    assert!(selection.best().is_none());
    assert!(selection.routes().is_empty());
}

#[test]
fn can_handle_empty_warehouse_list() {
    let environment = create_test_environment_with_random(Arc::new(FakeRandom::new(vec![], vec![])));
    let order = create_test_order();

    let selection = select_best_route(&order, &[], &create_constant_cost_model(5.), &environment);

    assert!(matches!(
        selection,
        Selection::Infeasible { reason: Infeasibility::InsufficientInventory, .. }
    ));
}

#[test]
fn can_select_minimum_cost_route() {
    let environment = create_test_environment_with_seed(11);
    let order = create_test_order();
    let warehouses = vec![
        create_test_warehouse_at("far", 49., 12., 500.),
        create_test_warehouse_at("near", 48.141, 11.581, 500.),
    ];

    let selection = select_best_route(&order, &warehouses, &create_distance_cost_model(), &environment);

    let best = selection.best().expect("expected best route");
    assert_eq!(best.route.warehouse_id, "near");
    assert_eq!(selection.routes().len(), 2 * ROUTES_PER_WAREHOUSE);
    assert!(selection.routes().iter().all(|route| route.predicted_cost >= best.predicted_cost));
}

#[test]
fn can_keep_first_candidate_on_cost_ties() {
    let environment = create_test_environment_with_seed(11);
    let order = create_test_order();
    let warehouses = vec![create_test_warehouse("w1", 500.), create_test_warehouse("w2", 500.)];

    // a constant model makes every candidate cost identical, so the first one in the
    // warehouse-then-index enumeration order must win
    let selection = select_best_route(&order, &warehouses, &create_constant_cost_model(5.), &environment);

    let best = selection.best().expect("expected best route");
    assert_eq!(best.route.route_id, "w1_1");
}

#[test]
fn can_preserve_generation_order_in_routes() {
    let environment = create_test_environment_with_seed(11);
    let order = create_test_order();
    let warehouses = vec![create_test_warehouse("a", 500.), create_test_warehouse("b", 500.)];

    let selection = select_best_route(&order, &warehouses, &create_constant_cost_model(5.), &environment);

    let ids: Vec<_> = selection.routes().iter().map(|route| route.route.route_id.clone()).collect();
    let expected: Vec<_> = ["a", "b"]
        .iter()
        .flat_map(|id| (1..=ROUTES_PER_WAREHOUSE).map(move |idx| format!("{id}_{idx}")))
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn can_report_infeasibility_when_costs_reach_threshold() {
    let environment = create_test_environment_with_seed(11);
    let order = create_test_order();
    let warehouses = vec![create_test_warehouse("w1", 500.)];

    let selection = select_best_route(
        &order,
        &warehouses,
        &create_constant_cost_model(INVENTORY_SHORTFALL_PENALTY),
        &environment,
    );

    assert!(matches!(
        selection,
        Selection::Infeasible { reason: Infeasibility::CostAboveThreshold, .. }
    ));
    assert!(selection.best().is_none());
    assert_eq!(selection.routes().len(), ROUTES_PER_WAREHOUSE);
}

#[test]
fn can_select_feasible_route_for_stocked_warehouse() {
    let environment = create_test_environment_with_seed(42);
    let model = train_cost_model(&TrainingConfig::default(), &environment).expect("cannot train model");
    let order = create_test_order();
    let warehouses = vec![create_test_warehouse("w1", 500.)];

    let selection = select_best_route(&order, &warehouses, &model, &environment);

    let best = selection.best().expect("expected best route");
    assert!(best.predicted_cost.is_finite());
    assert!(best.predicted_cost < INVENTORY_SHORTFALL_PENALTY);
    assert_eq!(selection.routes().len(), ROUTES_PER_WAREHOUSE);
}

#[test]
fn can_report_infeasibility_for_single_understocked_warehouse() {
    let environment = create_test_environment_with_seed(42);
    let model = train_cost_model(&TrainingConfig::default(), &environment).expect("cannot train model");
    let order = create_test_order_with_quantity(50.);
    let warehouses = vec![create_test_warehouse("w1", 10.)];

    let selection = select_best_route(&order, &warehouses, &model, &environment);

    assert!(matches!(
        selection,
        Selection::Infeasible { reason: Infeasibility::InsufficientInventory, .. }
    ));
    assert!(selection.best().is_none());
}

#[test]
fn can_prefer_closer_warehouse_across_seeds() {
    let environment = create_test_environment_with_seed(7);
    let model = train_cost_model(&TrainingConfig::default(), &environment).expect("cannot train model");
    let order = create_test_order();
    // the remote warehouse sits two orders of magnitude further away, so its distance
    // disadvantage dominates any lucky traffic draw
    let warehouses = vec![
        create_test_warehouse_at("remote", 148.14, 111.58, 500.),
        create_test_warehouse("close", 500.),
    ];

    let mut wins = FxHashMap::<String, usize>::default();
    (0..20).for_each(|seed| {
        let environment = create_test_environment_with_seed(seed);
        let selection = select_best_route(&order, &warehouses, &model, &environment);
        let best = selection.best().expect("expected best route");
        *wins.entry(best.route.warehouse_id.clone()).or_insert(0) += 1;
    });

    assert!(wins.get("close").copied().unwrap_or(0) > 10);
}
