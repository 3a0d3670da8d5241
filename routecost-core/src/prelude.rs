//! This module reimports a commonly used types.

pub use crate::estimation::generate_candidates;
pub use crate::estimation::select_best_route;
pub use crate::estimation::train_cost_model;
pub use crate::estimation::CostModel;
pub use crate::estimation::Infeasibility;
pub use crate::estimation::Selection;
pub use crate::estimation::TrainingConfig;

pub use crate::models::common::Cost;
pub use crate::models::common::Distance;
pub use crate::models::common::Quantity;
pub use crate::models::common::TimeWindow;
pub use crate::models::common::Timestamp;
pub use crate::models::Order;
pub use crate::models::RouteCandidate;
pub use crate::models::ScoredRoute;
pub use crate::models::Warehouse;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
