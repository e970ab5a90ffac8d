//! Order statistics shared by the detectors.
//!
//! NaN follows array-library semantics: any NaN in the input makes a
//! percentile or median NaN instead of being silently skipped.

/// Copy and sort ascending. `total_cmp` puts positive NaN last.
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Percentile of pre-sorted data using linear interpolation between
/// closest ranks (`rank = p/100 * (n-1)`).
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || sorted.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

/// Median of unsorted data.
pub(crate) fn median(values: &[f64]) -> f64 {
    percentile(&sorted_copy(values), 50.0)
}
