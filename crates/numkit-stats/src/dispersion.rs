//! Spread measures: population variance, standard deviation, sum of squares

use crate::central::mean;

/// Population variance: mean of squared deviations from the mean (N divisor)
///
/// Returns `0.0` for an empty slice.
pub fn population_variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    xs.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64
}

/// Population standard deviation, `sqrt(population_variance)`
///
/// This is the biased (N-divisor) estimator, not the sample (N-1) estimator.
/// Returns `0.0` for an empty slice.
pub fn population_std_dev(xs: &[f64]) -> f64 {
    population_variance(xs).sqrt()
}

/// Sum of squared elements
///
/// Returns `0.0` for an empty slice. Callers outside the statistics kernel
/// may feed this a difference sequence, e.g. a distance formula computing
/// `sqrt(sum_of_squares(&[dx, dy]))`.
pub fn sum_of_squares(xs: &[f64]) -> f64 {
    xs.iter().map(|&x| x * x).sum()
}
