/// Rebases a series so its first element reads 100.
///
/// A zero first element maps every point to 100.
pub fn normalize(series: &[f64]) -> Vec<f64> {
    let Some(&base) = series.first() else {
        return Vec::new();
    };

    if base == 0.0 {
        tracing::debug!(len = series.len(), "Normalization base is zero; flattening to 100.");
        return vec![100.0; series.len()];
    }

    series.iter().map(|value| value / base * 100.0).collect()
}
