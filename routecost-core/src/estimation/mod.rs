//! This module contains the cost estimation pipeline: synthetic model training, randomized
//! candidate generation, cost prediction and route selection.

use crate::utils::Float;

mod generator;
pub use self::generator::{generate_candidates, ROUTES_PER_WAREHOUSE};

mod predictor;
pub use self::predictor::{CostModel, FEATURE_DIMENSION};

mod selection;
pub use self::selection::{select_best_route, Infeasibility, Selection};

mod synthetic;
pub use self::synthetic::{generate_training_data, ground_truth_cost, INVENTORY_SHORTFALL_PENALTY};

mod trainer;
pub use self::trainer::{train_cost_model, TrainingConfig};

/// A traffic multiplier range shared by the synthetic data generator and the candidate
/// generator: a candidate's traffic draw must stay within the model's training domain.
pub(crate) const TRAFFIC_RANGE: (Float, Float) = (1., 3.);
