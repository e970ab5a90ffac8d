//! Jump detection: the first big gap in sorted values.
//!
//! Given `[1, 2, 3, 10, 12, 14]` the outliers start from `10`.
//! Each successive difference is scored against the mean of the differences
//! before it, `diff[i] / (mean(diff[..i]) + 1)`; the `+1` keeps early zero
//! gaps from dividing by zero and damps tiny jumps over a flat baseline.

use hscluster_core::errors::OutlierError;

const METHOD: &str = "jump_outliers";

/// Where the outlier run begins.
#[derive(Debug, Clone)]
pub(crate) struct JumpBoundary {
    /// Input positions in ascending value order (stable on ties).
    pub order: Vec<usize>,
    /// First sorted position of the outlier run.
    pub start: usize,
    /// Normalized score of the gap just below `start`.
    pub score: f64,
}

/// Find the largest normalized jump.
///
/// Ties resolve to the lowest gap. A NaN score wins as soon as it appears,
/// matching array-library argmax.
pub(crate) fn jump_boundary(values: &[f64]) -> Result<JumpBoundary, OutlierError> {
    let n = values.len();
    if n < 2 {
        return Err(OutlierError::too_short(METHOD, 2, n));
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut running_sum = 0.0;
    let mut best: Option<(usize, f64)> = None;

    for i in 0..n - 1 {
        let diff = values[order[i + 1]] - values[order[i]];
        let avg = if i == 0 { 0.0 } else { running_sum / i as f64 };
        let score = diff / (avg + 1.0);

        best = match best {
            None => Some((i, score)),
            Some((_, b)) if b.is_nan() => best,
            Some((_, b)) if score.is_nan() || score > b => Some((i, score)),
            keep => keep,
        };
        running_sum += diff;
    }

    // n >= 2 guarantees at least one gap was scored.
    let (gap, score) = best.unwrap_or((0, f64::NAN));

    Ok(JumpBoundary {
        order,
        start: gap + 1,
        score,
    })
}

/// Indices, in **sorted** order, of the values past the biggest jump.
///
/// The result is always the contiguous range `[k, n)`. When the biggest
/// jump is the last gap only the maximum is returned.
///
/// # Errors
/// `InvalidInput` when fewer than 2 values are given.
pub fn jump_outliers(values: &[f64]) -> Result<Vec<usize>, OutlierError> {
    let boundary = jump_boundary(values)?;
    Ok((boundary.start..values.len()).collect())
}

/// Same run as [`jump_outliers`], mapped back to positions in `values`
/// and returned in ascending position order.
pub fn jump_outliers_indexed(values: &[f64]) -> Result<Vec<usize>, OutlierError> {
    let boundary = jump_boundary(values)?;
    let mut indices = boundary.order[boundary.start..].to_vec();
    indices.sort_unstable();
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_starts_at_first_big_value() {
        let result = jump_outliers(&[1.0, 2.0, 3.0, 10.0, 12.0, 14.0]).unwrap();
        assert_eq!(result, vec![3, 4, 5]);
    }

    #[test]
    fn test_unsorted_input_uses_sorted_positions() {
        let result = jump_outliers(&[12.0, 1.0, 14.0, 3.0, 10.0, 2.0]).unwrap();
        assert_eq!(result, vec![3, 4, 5]);
    }

    #[test]
    fn test_indexed_maps_back_to_input() {
        let result = jump_outliers_indexed(&[12.0, 1.0, 14.0, 3.0, 10.0, 2.0]).unwrap();
        assert_eq!(result, vec![0, 2, 4]);
    }

    #[test]
    fn test_last_gap_gives_single_element() {
        let result = jump_outliers(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(result, vec![4]);
    }

    #[test]
    fn test_two_values() {
        assert_eq!(jump_outliers(&[5.0, 1.0]).unwrap(), vec![1]);
    }

    #[test]
    fn test_ties_pick_lowest_gap() {
        // Gaps [0, 0]: both score 0, the first wins.
        assert_eq!(jump_outliers(&[2.0, 2.0, 2.0]).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_too_few_values() {
        assert_eq!(
            jump_outliers(&[1.0]).unwrap_err(),
            OutlierError::InvalidInput {
                method: METHOD,
                required: 2,
                actual: 1
            }
        );
        assert!(jump_outliers(&[]).is_err());
    }

    #[test]
    fn test_nan_gap_wins_argmax() {
        // Sorted [1, 2, 3, 50, NaN]: the last gap is NaN and beats 47/2.
        assert_eq!(jump_outliers(&[1.0, 2.0, f64::NAN, 3.0, 50.0]).unwrap(), vec![4]);
    }

    #[test]
    fn test_first_nan_gap_beats_later_finite_gap() {
        // Negative NaN sorts first, so gap 0 is NaN; the 98 gap never takes over.
        let boundary = jump_boundary(&[100.0, -f64::NAN, 2.0, 1.0]).unwrap();
        assert_eq!(boundary.start, 1);
        assert!(boundary.score.is_nan());
        assert_eq!(jump_outliers(&[100.0, -f64::NAN, 2.0, 1.0]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_boundary_score() {
        let boundary = jump_boundary(&[1.0, 2.0, 3.0, 10.0, 12.0, 14.0]).unwrap();
        assert_eq!(boundary.start, 3);
        assert!((boundary.score - 3.5).abs() < 1e-12);
    }
}
