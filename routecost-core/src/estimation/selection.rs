#[cfg(test)]
#[path = "../../tests/unit/estimation/selection_test.rs"]
mod selection_test;

use crate::estimation::{generate_candidates, CostModel, INVENTORY_SHORTFALL_PENALTY, ROUTES_PER_WAREHOUSE};
use crate::models::{Order, ScoredRoute, Warehouse};
use crate::utils::{compare_floats, parallel_into_collect, Environment};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Specifies why no feasible route can be offered for an order. Both kinds are business
/// outcomes of a request, not faults.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Infeasibility {
    /// Every known warehouse has less stock than the requested quantity; no candidates were
    /// generated.
    InsufficientInventory,
    /// The cheapest predicted cost still reaches the inventory shortfall penalty, so every
    /// computed route is effectively unusable.
    CostAboveThreshold,
}

/// An outcome of route selection for a single order.
#[derive(Clone, Debug)]
pub enum Selection {
    /// The cheapest feasible route has been found.
    Route {
        /// A route with the minimum predicted cost.
        best: ScoredRoute,
        /// All scored routes including the best one, in generation order.
        routes: Vec<ScoredRoute>,
    },
    /// No feasible route exists for the order.
    Infeasible {
        /// A reason of the infeasibility.
        reason: Infeasibility,
        /// All scored routes computed before the decision, in generation order.
        routes: Vec<ScoredRoute>,
    },
}

impl Selection {
    /// Returns the best route if a feasible one was found.
    pub fn best(&self) -> Option<&ScoredRoute> {
        match self {
            Selection::Route { best, .. } => Some(best),
            Selection::Infeasible { .. } => None,
        }
    }

    /// Returns all scored routes in generation order.
    pub fn routes(&self) -> &[ScoredRoute] {
        match self {
            Selection::Route { routes, .. } | Selection::Infeasible { routes, .. } => routes.as_slice(),
        }
    }
}

/// Selects the cheapest feasible route for the order across all known warehouses as a
/// stateless single-pass reduction: generate candidates per warehouse, predict each one's
/// cost, track the minimum. The first candidate encountered with the minimum cost wins,
/// where the enumeration order is warehouse order, then candidate index.
pub fn select_best_route(
    order: &Order,
    warehouses: &[Warehouse],
    model: &CostModel,
    environment: &Environment,
) -> Selection {
    // no warehouse can satisfy the quantity, so skip candidate generation entirely
    if warehouses.iter().all(|warehouse| warehouse.inventory < order.quantity) {
        return Selection::Infeasible { reason: Infeasibility::InsufficientInventory, routes: vec![] };
    }

    // generation consumes the shared random source and stays sequential to keep a fixed
    // seed reproducible; prediction is pure and runs as an order-preserving parallel map
    let candidates = warehouses
        .iter()
        .flat_map(|warehouse| generate_candidates(order, warehouse, ROUTES_PER_WAREHOUSE, &environment.random))
        .collect::<Vec<_>>();

    debug_assert!(
        candidates.iter().map(|candidate| candidate.route_id.as_str()).collect::<FxHashSet<_>>().len()
            == candidates.len()
    );

    let routes = environment.parallelism.execute(|| {
        parallel_into_collect(candidates, |route| {
            let predicted_cost = model.predict_cost(&route, order);
            ScoredRoute { route, predicted_cost }
        })
    });

    let best =
        routes.iter().min_by(|left, right| compare_floats(left.predicted_cost, right.predicted_cost)).cloned();

    match best {
        Some(best) if compare_floats(best.predicted_cost, INVENTORY_SHORTFALL_PENALTY) == Ordering::Less => {
            (environment.logger)(
                format!(
                    "selected route {} with predicted cost {:.3} out of {} candidates",
                    best.route.route_id,
                    best.predicted_cost,
                    routes.len()
                )
                .as_str(),
            );
            Selection::Route { best, routes }
        }
        Some(_) => Selection::Infeasible { reason: Infeasibility::CostAboveThreshold, routes },
        None => Selection::Infeasible { reason: Infeasibility::InsufficientInventory, routes },
    }
}
