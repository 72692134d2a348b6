//! Mode computation via a transient frequency table

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Most frequent values in the sample
///
/// Builds a frequency table over exact numeric equality and returns every
/// value whose count equals the maximum count, in ascending order. Multiple
/// modes are all returned rather than one being chosen arbitrarily, and the
/// ordering makes the result deterministic for a fixed input. Returns an
/// empty vector for an empty slice.
pub fn mode(xs: &[f64]) -> Vec<f64> {
    // Frequency table local to this call; released on return.
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &x in xs {
        *counts.entry(OrderedFloat(x)).or_insert(0) += 1;
    }

    let max_count = match counts.values().max() {
        Some(&c) => c,
        None => return Vec::new(),
    };

    counts
        .iter()
        .filter(|&(_, &count)| count == max_count)
        .map(|(&value, _)| value.into_inner())
        .collect()
}
