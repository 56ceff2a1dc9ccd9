//! Pearson correlation between equal-length series.

/// Denominators below this magnitude mean at least one series has no
/// variance; correlation is undefined, reported as 0.0.
const MIN_DENOMINATOR: f64 = 1e-9;

/// Pearson correlation coefficient in [-1, 1].
///
/// Mismatched lengths and empty input return 0.0 — the documented
/// degenerate "no correlation" case, deliberately not an error and
/// never a silent truncation to the shorter series.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_sq_x += xi * xi;
        sum_sq_y += yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_sq_x - sum_x * sum_x) * (n * sum_sq_y - sum_y * sum_y)).sqrt();

    if denominator.abs() < MIN_DENOMINATOR {
        return 0.0;
    }
    numerator / denominator
}
