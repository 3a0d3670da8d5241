//! This module contains a delivery domain model.

pub mod common;

mod order;
pub use self::order::Order;

mod warehouse;
pub use self::warehouse::Warehouse;

mod route;
pub use self::route::{RouteCandidate, ScoredRoute};

pub mod examples;
