//! Central tendency: mean and median

/// Arithmetic mean of the sample, `sum / n`
///
/// Returns `0.0` for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Median of the sample
///
/// Sorts a copy of the input ascending under `f64::total_cmp` (a total order
/// on the reals). For an odd number of elements the median is the middle
/// element; for an even number it is the average of the two middle elements.
/// Returns `0.0` for an empty slice.
pub fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
