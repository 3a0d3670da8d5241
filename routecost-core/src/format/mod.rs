//! This module provides response entities which the hosting service serializes to its
//! callers. Rounding happens only here: it is a presentation concern, not part of the core
//! numeric contract.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use crate::estimation::Selection;
use crate::models::ScoredRoute;
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A scored route in presentation form.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteEntry {
    /// A route id.
    pub route_id: String,
    /// An id of the warehouse the route starts from.
    pub warehouse_id: String,
    /// A route distance, rounded to 3 decimal places.
    pub distance: Float,
    /// A traffic multiplier, rounded to 2 decimal places.
    pub traffic: Float,
    /// Warehouse stock level, rounded to 2 decimal places.
    pub inventory: Float,
    /// A predicted cost, rounded to 3 decimal places.
    pub predicted_cost: Float,
}

/// A route selection result in presentation form.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SelectionResponse {
    /// The cheapest feasible route if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_route: Option<RouteEntry>,
    /// All scored routes in generation order.
    pub all_routes: Vec<RouteEntry>,
}

impl From<&ScoredRoute> for RouteEntry {
    fn from(scored: &ScoredRoute) -> Self {
        Self {
            route_id: scored.route.route_id.clone(),
            warehouse_id: scored.route.warehouse_id.clone(),
            distance: round_to(scored.route.distance, 3),
            traffic: round_to(scored.route.traffic, 2),
            inventory: round_to(scored.route.warehouse_inventory, 2),
            predicted_cost: round_to(scored.predicted_cost, 3),
        }
    }
}

impl From<&Selection> for SelectionResponse {
    fn from(selection: &Selection) -> Self {
        Self {
            best_route: selection.best().map(RouteEntry::from),
            all_routes: selection.routes().iter().map(RouteEntry::from).collect(),
        }
    }
}

/// Writes the selection in json format.
pub fn write_selection<W: Write>(selection: &Selection, writer: &mut BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &SelectionResponse::from(selection))?;

    Ok(())
}

fn round_to(value: Float, digits: i32) -> Float {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
