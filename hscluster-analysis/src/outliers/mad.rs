//! Modified z-score over the median absolute deviation.
//!
//! Works on points of any dimensionality: scalars are treated as
//! one-coordinate rows so both cases share one path. Each point's score is
//! `0.6745 * |p - median| / MAD`, where `|.|` is the Euclidean distance to
//! the coordinate-wise median and `MAD` is the median of those distances.

use hscluster_core::errors::OutlierError;

use super::stats::median;
use super::types::ZeroSpreadPolicy;

const METHOD: &str = "mad_based_outlier";

/// 75th percentile of the standard normal; puts MAD on a z-score scale.
pub const MAD_SCALE: f64 = 0.6745;

/// Default modified z-score cutoff.
pub const DEFAULT_MAD_THRESHOLD: f64 = 2.5;

/// Outlier mask for scalar values, aligned with `points`.
///
/// # Errors
/// `InvalidInput` when `points` is empty; `DegenerateInput` when the median
/// absolute deviation is zero.
pub fn mad_based_outlier(points: &[f64], thresh: f64) -> Result<Vec<bool>, OutlierError> {
    mad_based_outlier_with_policy(points, thresh, ZeroSpreadPolicy::Reject)
}

/// [`mad_based_outlier`] with an explicit zero-spread policy.
pub fn mad_based_outlier_with_policy(
    points: &[f64],
    thresh: f64,
    policy: ZeroSpreadPolicy,
) -> Result<Vec<bool>, OutlierError> {
    let rows: Vec<[f64; 1]> = points.iter().map(|&p| [p]).collect();
    mad_based_outlier_rows_with_policy(&rows, thresh, policy)
}

/// Outlier mask for multi-dimensional points, aligned with `rows`.
///
/// # Errors
/// `InvalidInput` when `rows` is empty or has zero-length rows,
/// `RaggedRows` when rows differ in length, `DegenerateInput` when the
/// median absolute deviation is zero.
pub fn mad_based_outlier_rows<R: AsRef<[f64]>>(
    rows: &[R],
    thresh: f64,
) -> Result<Vec<bool>, OutlierError> {
    mad_based_outlier_rows_with_policy(rows, thresh, ZeroSpreadPolicy::Reject)
}

/// [`mad_based_outlier_rows`] with an explicit zero-spread policy.
pub fn mad_based_outlier_rows_with_policy<R: AsRef<[f64]>>(
    rows: &[R],
    thresh: f64,
    policy: ZeroSpreadPolicy,
) -> Result<Vec<bool>, OutlierError> {
    // NaN scores (NaN in the input) compare false and are never flagged.
    Ok(modified_z_scores(rows, policy)?
        .into_iter()
        .map(|z| z > thresh)
        .collect())
}

/// Modified z-score of every row, in input order.
pub fn modified_z_scores<R: AsRef<[f64]>>(
    rows: &[R],
    policy: ZeroSpreadPolicy,
) -> Result<Vec<f64>, OutlierError> {
    let dim = check_shape(rows)?;

    let center: Vec<f64> = (0..dim)
        .map(|j| {
            let column: Vec<f64> = rows.iter().map(|r| r.as_ref()[j]).collect();
            median(&column)
        })
        .collect();

    let distances: Vec<f64> = rows
        .iter()
        .map(|r| {
            r.as_ref()
                .iter()
                .zip(&center)
                .map(|(x, m)| (x - m).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    let mad = median(&distances);

    if mad == 0.0 {
        return match policy {
            ZeroSpreadPolicy::Reject => Err(OutlierError::DegenerateInput {
                method: METHOD,
                reason: "median absolute deviation is zero",
            }),
            ZeroSpreadPolicy::TreatAsInlier => Ok(distances
                .iter()
                .map(|&d| if d > 0.0 { f64::INFINITY } else { 0.0 })
                .collect()),
        };
    }

    Ok(distances.iter().map(|d| MAD_SCALE * d / mad).collect())
}

/// Validate the row layout and return the shared dimensionality.
fn check_shape<R: AsRef<[f64]>>(rows: &[R]) -> Result<usize, OutlierError> {
    let first = rows
        .first()
        .ok_or_else(|| OutlierError::too_short(METHOD, 1, 0))?;
    let dim = first.as_ref().len();
    if dim == 0 {
        return Err(OutlierError::RaggedRows {
            expected: 1,
            row: 0,
            actual: 0,
        });
    }
    for (row, r) in rows.iter().enumerate().skip(1) {
        let actual = r.as_ref().len();
        if actual != dim {
            return Err(OutlierError::RaggedRows {
                expected: dim,
                row,
                actual,
            });
        }
    }
    Ok(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_outlier() {
        let values = [10.0, 11.0, 9.0, 10.5, 9.5, 10.0, 50.0];
        let mask = mad_based_outlier(&values, DEFAULT_MAD_THRESHOLD).unwrap();
        assert_eq!(mask, vec![false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_mask_follows_input_order() {
        let values = [50.0, 10.0, 11.0, 9.0, 10.5, 9.5, 10.0];
        let mask = mad_based_outlier(&values, DEFAULT_MAD_THRESHOLD).unwrap();
        assert!(mask[0]);
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
    }

    #[test]
    fn test_scores_match_formula() {
        // median 3, distances [2, 1, 0, 1, 2], MAD 1
        let scores =
            modified_z_scores(&[[1.0], [2.0], [3.0], [4.0], [5.0]], ZeroSpreadPolicy::Reject)
                .unwrap();
        let expected = [2.0 * MAD_SCALE, MAD_SCALE, 0.0, MAD_SCALE, 2.0 * MAD_SCALE];
        for (s, e) in scores.iter().zip(expected) {
            assert!((s - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rows_use_euclidean_distance() {
        let rows = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![-1.0, 0.0],
            vec![0.0, -1.0],
            vec![30.0, 40.0],
        ];
        let mask = mad_based_outlier_rows(&rows, DEFAULT_MAD_THRESHOLD).unwrap();
        assert_eq!(mask, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_identical_points_rejected() {
        let err = mad_based_outlier(&[4.0; 6], 2.5).unwrap_err();
        assert!(matches!(err, OutlierError::DegenerateInput { .. }));
    }

    #[test]
    fn test_zero_spread_as_inlier() {
        let mask =
            mad_based_outlier_with_policy(&[1.0, 1.0, 1.0, 1.0, 100.0], 2.5, ZeroSpreadPolicy::TreatAsInlier)
                .unwrap();
        assert_eq!(mask, vec![false, false, false, false, true]);

        let all_same =
            mad_based_outlier_with_policy(&[7.0; 3], 2.5, ZeroSpreadPolicy::TreatAsInlier).unwrap();
        assert_eq!(all_same, vec![false; 3]);
    }

    #[test]
    fn test_shape_errors() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            mad_based_outlier(&empty, 2.5),
            Err(OutlierError::InvalidInput { .. })
        ));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            mad_based_outlier_rows(&ragged, 2.5).unwrap_err(),
            OutlierError::RaggedRows {
                expected: 2,
                row: 1,
                actual: 1
            }
        );

        let no_coords: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert!(mad_based_outlier_rows(&no_coords, 2.5).is_err());
    }

    #[test]
    fn test_nan_flags_nothing() {
        let mask = mad_based_outlier(&[1.0, 2.0, f64::NAN, 3.0, 100.0], 2.5).unwrap();
        assert_eq!(mask, vec![false; 5]);
    }
}
