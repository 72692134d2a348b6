//! Sample extrema in a single pass

/// Minimum and maximum of a sample, as one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

/// Smallest and largest element of the sample
///
/// Returns `None` for an empty slice, so "no data" stays distinguishable
/// from every legitimate numeric result.
pub fn min_max(xs: &[f64]) -> Option<MinMax> {
    let (&first, rest) = xs.split_first()?;
    let mut result = MinMax {
        min: first,
        max: first,
    };
    for &x in rest {
        if x < result.min {
            result.min = x;
        }
        if x > result.max {
            result.max = x;
        }
    }
    Some(result)
}
