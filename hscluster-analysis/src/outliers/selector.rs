//! OutlierDetector — runs the configured method and reports every flagged
//! value with its position in the caller's input.

use hscluster_core::config::OutlierSettings;
use hscluster_core::errors::{ConfigError, OutlierError};

use super::jump::jump_boundary;
use super::mad::modified_z_scores;
use super::quartile::quartile_fence;
use super::types::{OutlierConfig, OutlierMethod, OutlierResult, ZeroSpreadPolicy};

/// Facade over the three detection methods.
#[derive(Debug, Clone, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Build a detector from the `[outliers]` config section.
    pub fn from_settings(settings: &OutlierSettings) -> Result<Self, ConfigError> {
        Ok(Self::with_config(OutlierConfig {
            method: settings.effective_method().parse()?,
            quartile_threshold: settings.effective_quartile_threshold(),
            mad_threshold: settings.effective_mad_threshold(),
            zero_spread: settings.effective_zero_spread().parse()?,
        }))
    }

    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }

    /// Detect upper outliers with the configured method.
    ///
    /// Results are sorted by `index`, which always refers to `values`.
    pub fn detect(&self, values: &[f64]) -> Result<Vec<OutlierResult>, OutlierError> {
        let results = match self.config.method {
            OutlierMethod::Jump => detect_jump(values)?,
            OutlierMethod::Quartile => detect_quartile(values, self.config.quartile_threshold)?,
            OutlierMethod::Mad => {
                detect_mad(values, self.config.mad_threshold, self.config.zero_spread)?
            }
        };

        tracing::debug!(
            outlier_method = %self.config.method,
            input_len = values.len(),
            outlier_count = results.len(),
            "outlier detection complete"
        );

        Ok(results)
    }
}

fn detect_jump(values: &[f64]) -> Result<Vec<OutlierResult>, OutlierError> {
    let boundary = jump_boundary(values)?;
    let mut indices = boundary.order[boundary.start..].to_vec();
    indices.sort_unstable();

    Ok(indices
        .into_iter()
        .map(|index| OutlierResult {
            index,
            value: values[index],
            test_statistic: boundary.score,
            method: OutlierMethod::Jump,
        })
        .collect())
}

fn detect_quartile(values: &[f64], thresh: f64) -> Result<Vec<OutlierResult>, OutlierError> {
    let fence = quartile_fence(values, thresh)?;

    Ok(values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v > fence.upper)
        .map(|(index, &value)| {
            let above = value - fence.upper;
            OutlierResult {
                index,
                value,
                test_statistic: if fence.iqr > 0.0 { above / fence.iqr } else { above },
                method: OutlierMethod::Quartile,
            }
        })
        .collect())
}

fn detect_mad(
    values: &[f64],
    thresh: f64,
    policy: ZeroSpreadPolicy,
) -> Result<Vec<OutlierResult>, OutlierError> {
    let rows: Vec<[f64; 1]> = values.iter().map(|&v| [v]).collect();
    let scores = modified_z_scores(&rows, policy)?;

    Ok(scores
        .into_iter()
        .enumerate()
        .filter(|&(_, z)| z > thresh)
        .map(|(index, z)| OutlierResult {
            index,
            value: values[index],
            test_statistic: z,
            method: OutlierMethod::Mad,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(method: OutlierMethod) -> OutlierDetector {
        OutlierDetector::with_config(OutlierConfig {
            method,
            ..Default::default()
        })
    }

    #[test]
    fn test_jump_reports_input_positions() {
        let values = [12.0, 1.0, 14.0, 3.0, 10.0, 2.0];
        let results = detector(OutlierMethod::Jump).detect(&values).unwrap();
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);
        assert!(results.iter().all(|r| (r.test_statistic - 3.5).abs() < 1e-12));
    }

    #[test]
    fn test_quartile_statistic_in_iqr_units() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let results = detector(OutlierMethod::Quartile).detect(&values).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 8);
        assert_eq!(results[0].value, 100.0);
        // fence 15, IQR 4
        assert!((results[0].test_statistic - 21.25).abs() < 1e-12);
    }

    #[test]
    fn test_mad_reports_z_score() {
        let values = [10.0, 11.0, 9.0, 10.5, 9.5, 10.0, 50.0];
        let results = detector(OutlierMethod::Mad).detect(&values).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 6);
        assert!((results[0].test_statistic - 0.6745 * 40.0 / 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_errors_pass_through() {
        assert!(detector(OutlierMethod::Jump).detect(&[1.0]).is_err());
        assert!(detector(OutlierMethod::Quartile).detect(&[1.0, 2.0]).is_err());
        assert!(detector(OutlierMethod::Mad).detect(&[3.0; 4]).is_err());
    }

    #[test]
    fn test_from_settings() {
        let settings = OutlierSettings {
            method: Some("mad".to_string()),
            mad_threshold: Some(3.0),
            zero_spread: Some("inlier".to_string()),
            ..Default::default()
        };
        let detector = OutlierDetector::from_settings(&settings).unwrap();
        assert_eq!(detector.config().method, OutlierMethod::Mad);
        assert_eq!(detector.config().mad_threshold, 3.0);
        assert_eq!(detector.config().quartile_threshold, 2.0);
        assert_eq!(detector.config().zero_spread, ZeroSpreadPolicy::TreatAsInlier);
        assert!(detector.detect(&[3.0; 4]).unwrap().is_empty());
    }

    #[test]
    fn test_from_settings_rejects_unknown_method() {
        let settings = OutlierSettings {
            method: Some("grubbs".to_string()),
            ..Default::default()
        };
        assert!(OutlierDetector::from_settings(&settings).is_err());
    }
}
