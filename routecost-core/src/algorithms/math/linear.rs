#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/linear_test.rs"]
mod linear_test;

use crate::utils::{Float, GenericResult};

const SINGULARITY_EPSILON: Float = 1E-10;

/// A linear model fitted with ordinary least squares: a weight per input feature plus an
/// intercept. The model carries no feature names, only positional semantics, so prediction
/// inputs must use the same feature order as the fitting data.
pub struct LinearRegression {
    coefficients: Vec<Float>,
    intercept: Float,
}

impl LinearRegression {
    /// Creates a new instance of `LinearRegression` from already known parameters.
    pub fn new(coefficients: Vec<Float>, intercept: Float) -> Self {
        Self { coefficients, intercept }
    }

    /// Fits the model to the given labeled data using the closed-form normal equations.
    /// The accumulation is sequential, so the fit is deterministic for a fixed input.
    pub fn fit(features: &[Vec<Float>], labels: &[Float]) -> GenericResult<Self> {
        if features.is_empty() {
            return Err("cannot fit linear regression on empty data".into());
        }

        if features.len() != labels.len() {
            return Err(format!(
                "cannot fit linear regression: {} feature rows, but {} labels",
                features.len(),
                labels.len()
            )
            .into());
        }

        let dimension = features[0].len();
        if dimension == 0 || features.iter().any(|row| row.len() != dimension) {
            return Err("cannot fit linear regression: ragged or empty feature rows".into());
        }

        // accumulate the normal matrix and right-hand side over rows augmented
        // with a trailing intercept column
        let augmented = dimension + 1;
        let mut normal = vec![0.; augmented * augmented];
        let mut rhs = vec![0.; augmented];

        features.iter().zip(labels.iter()).for_each(|(row, &label)| {
            let value_at = |idx: usize| if idx < dimension { row[idx] } else { 1. };

            (0..augmented).for_each(|i| {
                let left = value_at(i);
                (0..augmented).for_each(|j| {
                    normal[i * augmented + j] += left * value_at(j);
                });
                rhs[i] += left * label;
            });
        });

        let mut solution = solve_linear_system(&mut normal, &mut rhs, augmented)?;

        let intercept = solution.pop().unwrap_or(0.);

        Ok(Self { coefficients: solution, intercept })
    }

    /// Predicts a value for the given feature vector as a linear combination of the fitted
    /// weights plus the intercept. The result may be negative in extrapolated regions.
    pub fn predict(&self, features: &[Float]) -> Float {
        debug_assert!(features.len() == self.coefficients.len());

        self.coefficients.iter().zip(features.iter()).map(|(weight, feature)| weight * feature).sum::<Float>()
            + self.intercept
    }

    /// Returns the fitted feature weights.
    pub fn coefficients(&self) -> &[Float] {
        self.coefficients.as_slice()
    }

    /// Returns the fitted intercept.
    pub fn intercept(&self) -> Float {
        self.intercept
    }
}

/// Solves `a * x = b` in place using Gaussian elimination with partial pivoting, where `a` is
/// a row-major square matrix of the given size.
fn solve_linear_system(a: &mut [Float], b: &mut [Float], size: usize) -> GenericResult<Vec<Float>> {
    for column in 0..size {
        let pivot_row = (column..size)
            .max_by(|&left, &right| {
                a[left * size + column].abs().total_cmp(&a[right * size + column].abs())
            })
            .expect("non-empty row range");

        if a[pivot_row * size + column].abs() < SINGULARITY_EPSILON {
            return Err("cannot fit linear regression: singular normal matrix".into());
        }

        if pivot_row != column {
            for idx in 0..size {
                a.swap(column * size + idx, pivot_row * size + idx);
            }
            b.swap(column, pivot_row);
        }

        for row in (column + 1)..size {
            let factor = a[row * size + column] / a[column * size + column];
            for idx in column..size {
                a[row * size + idx] -= factor * a[column * size + idx];
            }
            b[row] -= factor * b[column];
        }
    }

    let mut solution = vec![0.; size];
    for row in (0..size).rev() {
        let tail: Float = ((row + 1)..size).map(|idx| a[row * size + idx] * solution[idx]).sum();
        solution[row] = (b[row] - tail) / a[row * size + row];
    }

    Ok(solution)
}
