#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/statistics_test.rs"]
mod statistics_test;

use crate::utils::Float;

/// Gets mean of values using given slice.
pub fn get_mean(values: &[Float]) -> Float {
    if values.is_empty() {
        0.
    } else {
        let sum: Float = values.iter().sum();
        sum / values.len() as Float
    }
}

/// Returns variance.
pub fn get_variance(values: &[Float]) -> Float {
    get_variance_mean(values).0
}

/// Returns standard deviation.
pub fn get_stdev(values: &[Float]) -> Float {
    get_variance_mean(values).0.sqrt()
}

/// Returns variance and mean.
fn get_variance_mean(values: &[Float]) -> (Float, Float) {
    let mean = get_mean(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    // NOTE Bessel's correction is not used here
    ((first - (second * second / values.len() as Float)) / (values.len() as Float), mean)
}
