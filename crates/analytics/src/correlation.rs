//! Pearson correlation and its dashboard classification.

use core_types::CorrelationStrength;
use serde::{Deserialize, Serialize};

/// A coefficient together with the band it falls into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    pub description: String,
}

impl CorrelationResult {
    pub fn color(&self) -> &'static str {
        self.strength.color()
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson's r for two equally long series.
///
/// Returns 0 when the lengths differ, either series is empty, or either
/// series is constant.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n != y.len() || n == 0 {
        tracing::debug!(x_len = n, y_len = y.len(), "Correlation skipped: unusable series lengths.");
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        tracing::debug!("Correlation skipped: constant series.");
        return 0.0;
    }

    // Rounding can push |r| a few ulps past 1 on exactly linear data.
    (covariance / (variance_x * variance_y).sqrt()).clamp(-1.0, 1.0)
}

/// Bands a coefficient by its magnitude. Lower bounds are inclusive.
pub fn classify_correlation(r: f64) -> CorrelationResult {
    let abs = r.abs();
    let positive = r > 0.0;

    let (strength, description) = if abs >= 0.7 {
        let strength = if positive {
            CorrelationStrength::StrongPositive
        } else {
            CorrelationStrength::StrongNegative
        };
        (strength, if abs >= 0.9 { "极强相关" } else { "强相关" })
    } else if abs >= 0.4 {
        let strength = if positive {
            CorrelationStrength::ModeratePositive
        } else {
            CorrelationStrength::ModerateNegative
        };
        (strength, "中等相关")
    } else {
        (CorrelationStrength::Weak, "弱相关或无相关")
    };

    CorrelationResult {
        coefficient: r,
        strength,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson_correlation(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn exactly_linear_series_stay_within_unit_range() {
        let x = [0.1, 0.7, 1.3, 2.9, 3.3];
        for k in [-3.7, -0.3, 0.1, 1.9, 17.0] {
            let y: Vec<f64> = x.iter().map(|v| k * v + 0.2).collect();
            let r = pearson_correlation(&x, &y);
            assert!((-1.0..=1.0).contains(&r), "k={k} r={r}");
            assert!((r.abs() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_series_yields_zero() {
        assert_eq!(pearson_correlation(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn empty_series_yields_zero() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
    }

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(classify_correlation(0.9).description, "极强相关");
        assert_eq!(classify_correlation(0.7).strength, CorrelationStrength::StrongPositive);
        assert_eq!(classify_correlation(0.7).description, "强相关");
        assert_eq!(classify_correlation(0.4).strength, CorrelationStrength::ModeratePositive);
        assert_eq!(classify_correlation(0.39999).strength, CorrelationStrength::Weak);
    }

    #[test]
    fn negative_bands_follow_sign() {
        assert_eq!(classify_correlation(-0.95).strength, CorrelationStrength::StrongNegative);
        assert_eq!(classify_correlation(-0.95).description, "极强相关");
        assert_eq!(classify_correlation(-0.5).strength, CorrelationStrength::ModerateNegative);
        assert_eq!(classify_correlation(-0.1).strength, CorrelationStrength::Weak);
    }

    #[test]
    fn colors_track_bands() {
        assert_eq!(classify_correlation(0.8).color(), "#007AFF");
        assert_eq!(classify_correlation(-0.45).color(), "#FF9500");
        assert_eq!(classify_correlation(0.0).color(), "#86868B");
    }
}
