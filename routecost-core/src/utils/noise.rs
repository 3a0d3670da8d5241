#[cfg(test)]
#[path = "../../tests/unit/utils/noise_test.rs"]
mod noise_test;

use crate::utils::{Float, Random};
use std::sync::Arc;

/// Provides way to apply a relative noise to a floating point value.
#[derive(Clone)]
pub struct Noise {
    range: (Float, Float),
    random: Arc<dyn Random + Send + Sync>,
}

impl Noise {
    /// Creates a new instance of `Noise` which perturbs the target value by a factor
    /// sampled from the given range: `value = value + value * sample_from(range)`.
    pub fn new_with_addition(range: (Float, Float), random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { range, random }
    }

    /// Generates a perturbed value. A sample below -1 flips the sign of the result.
    pub fn generate(&self, value: Float) -> Float {
        value + value * self.random.uniform_real(self.range.0, self.range.1)
    }

    /// Returns random generator.
    pub fn random(&self) -> &(dyn Random + Send + Sync) {
        self.random.as_ref()
    }
}
