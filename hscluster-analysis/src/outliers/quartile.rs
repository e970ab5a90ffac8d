//! Quartile method: flag values above `Q3 + thresh * IQR`.
//!
//! Only the upper fence is used. The default multiplier of 2.0 is looser
//! than Tukey's 1.5 and trades recall for fewer false positives.

use hscluster_core::errors::OutlierError;

use super::stats::{percentile, sorted_copy};

const METHOD: &str = "outliers";

/// Default IQR multiplier above Q3.
pub const DEFAULT_QUARTILE_THRESHOLD: f64 = 2.0;

/// Quartiles and the derived upper fence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileFence {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Values strictly above this are outliers.
    pub upper: f64,
}

/// Compute the upper fence for `values`.
///
/// NaN anywhere in `values` makes every field NaN, so nothing is flagged.
///
/// # Errors
/// `InvalidInput` when fewer than 4 values are given.
pub fn quartile_fence(values: &[f64], thresh: f64) -> Result<QuartileFence, OutlierError> {
    if values.len() < 4 {
        return Err(OutlierError::too_short(METHOD, 4, values.len()));
    }

    let sorted = sorted_copy(values);
    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;

    Ok(QuartileFence {
        q1,
        q3,
        iqr,
        upper: q3 + thresh * iqr,
    })
}

/// Indices, in **input** order, of values above `Q3 + thresh * IQR`.
///
/// Permuting `values` permutes the result accordingly, and raising
/// `thresh` can only shrink it.
pub fn outliers(values: &[f64], thresh: f64) -> Result<Vec<usize>, OutlierError> {
    let fence = quartile_fence(values, thresh)?;
    Ok(values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v > fence.upper)
        .map(|(i, _)| i)
        .collect())
}
