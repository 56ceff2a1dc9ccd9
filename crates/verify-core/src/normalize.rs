//! Z-score normalization with a degenerate-signal guard.

/// Signals with population stdev below this are left untouched — a
/// near-constant series carries no usable shape and dividing by its
/// stdev would only amplify noise.
const MIN_STDEV: f64 = 1e-6;

/// Normalize a series to zero mean and unit variance.
///
/// Degenerate (near-constant) input is returned unchanged. Output
/// length always equals input length.
pub fn zscore(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return vec![];
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let stdev = variance.sqrt();

    if stdev < MIN_STDEV {
        return values.to_vec();
    }

    values.iter().map(|v| (v - mean) / stdev).collect()
}
