use crate::correlation::{mean, pearson_correlation};
use serde::{Deserialize, Serialize};

/// An ordinary-least-squares line `y = slope * x + intercept`.
///
/// Holds only its two coefficients, so copies can be handed out and evaluated
/// freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearModel {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits `y` against `x` by ordinary least squares.
///
/// Mismatched or empty input yields the zeroed model, whose `predict` is
/// always 0. A constant `x` gives a flat line through the mean of `y`.
pub fn fit_linear(x: &[f64], y: &[f64]) -> LinearModel {
    let n = x.len();
    if n != y.len() || n == 0 {
        tracing::debug!(x_len = n, y_len = y.len(), "Regression skipped: unusable series lengths.");
        return LinearModel::default();
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (numerator, denominator) = x.iter().zip(y).fold((0.0, 0.0), |(num, den), (&xi, &yi)| {
        let dx = xi - mean_x;
        (num + dx * (yi - mean_y), den + dx * dx)
    });

    let slope = if denominator == 0.0 { 0.0 } else { numerator / denominator };

    LinearModel {
        slope,
        intercept: mean_y - slope * mean_x,
        r_squared: pearson_correlation(x, y).powi(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_model_predicts_zero() {
        let model = fit_linear(&[], &[]);
        assert_eq!(model, LinearModel::default());
        assert_eq!(model.predict(123.0), 0.0);
    }

    #[test]
    fn constant_x_gives_flat_line_at_mean() {
        let model = fit_linear(&[2.0, 2.0, 2.0], &[1.0, 2.0, 6.0]);
        assert_eq!(model.slope, 0.0);
        assert!((model.intercept - 3.0).abs() < 1e-12);
        assert_eq!(model.r_squared, 0.0);
    }

    #[test]
    fn noisy_fit_has_partial_r_squared() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.5, 5.5, 8.5, 9.5];
        let model = fit_linear(&x, &y);
        assert!(model.r_squared > 0.9 && model.r_squared < 1.0);
        assert!((model.predict(3.0) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn model_outlives_its_inputs() {
        let model = {
            let x = vec![0.0, 1.0];
            let y = vec![1.0, 3.0];
            fit_linear(&x, &y)
        };
        assert!((model.predict(10.0) - 21.0).abs() < 1e-12);
    }
}
