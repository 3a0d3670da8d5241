#[cfg(test)]
#[path = "../../tests/unit/estimation/trainer_test.rs"]
mod trainer_test;

use crate::algorithms::math::{get_stdev, LinearRegression};
use crate::estimation::{generate_training_data, CostModel};
use crate::utils::{parallel_collect, Environment, GenericResult, Timer};

/// Specifies synthetic training parameters.
#[derive(Clone, Debug)]
pub struct TrainingConfig {
    /// Amount of synthetic examples to draw.
    pub sample_count: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { sample_count: 2000 }
    }
}

/// Trains the cost model on synthetic data drawn from the environment's random source. Runs
/// once at host start; fails only if the underlying fitting routine fails, which is not
/// expected under the synthetic generator.
pub fn train_cost_model(config: &TrainingConfig, environment: &Environment) -> GenericResult<CostModel> {
    let timer = Timer::start();

    let (features, labels) = generate_training_data(config.sample_count, environment.random.as_ref());
    let regression = LinearRegression::fit(&features, &labels)?;

    let predictions =
        environment.parallelism.execute(|| parallel_collect(&features, |row| regression.predict(row)));
    let residuals =
        predictions.iter().zip(labels.iter()).map(|(prediction, label)| prediction - label).collect::<Vec<_>>();

    (environment.logger)(
        format!(
            "trained cost model on {} synthetic samples in {}ms, residual stdev: {:.3}",
            config.sample_count,
            timer.elapsed_millis(),
            get_stdev(&residuals)
        )
        .as_str(),
    );

    Ok(CostModel::new(regression))
}
