//! Cross-modal resampling of the gyro stream onto flow timestamps.
//!
//! The gyro typically runs at 100–500 Hz while video frames arrive at
//! 24–60 Hz, so the gyro series is linearly interpolated at each flow
//! timestamp. The cursor into the gyro series only ever advances, which
//! requires target timestamps in increasing order — the flow signal
//! guarantees that by construction.

use vericap_signal_model::sample::{GyroAxis, GyroSample};

/// Bracket widths below this are treated as coincident samples.
const MIN_BRACKET_SECS: f64 = 1e-9;

/// Resample one gyro axis onto `target_ts` by linear interpolation.
///
/// Targets beyond the last gyro sample clamp to the final value rather
/// than extrapolating. Returns an empty vec if either input is empty;
/// otherwise the output length equals `target_ts.len()`.
pub fn resample_axis(target_ts: &[f64], gyro: &[GyroSample], axis: GyroAxis) -> Vec<f64> {
    resample_with(target_ts, gyro, |s| s.axis(axis))
}

/// Resample the gyro magnitude onto a uniform grid at `rate_hz`.
///
/// The grid spans the recording from first to last gyro timestamp. Used
/// by the tremor analyzer, whose spectral estimate needs evenly spaced
/// samples.
pub fn resample_magnitude_uniform(gyro: &[GyroSample], rate_hz: f64) -> Vec<f64> {
    if gyro.is_empty() || rate_hz <= 0.0 {
        return vec![];
    }
    let start = gyro[0].timestamp;
    let end = gyro[gyro.len() - 1].timestamp;
    if end < start {
        return vec![];
    }
    let step = 1.0 / rate_hz;
    let count = ((end - start) / step).floor() as usize + 1;
    let grid: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    resample_with(&grid, gyro, |s| s.magnitude())
}

fn resample_with<F>(target_ts: &[f64], gyro: &[GyroSample], value: F) -> Vec<f64>
where
    F: Fn(&GyroSample) -> f64,
{
    if target_ts.is_empty() || gyro.is_empty() {
        return vec![];
    }

    let mut out = Vec::with_capacity(target_ts.len());
    let mut cursor = 0usize;

    for &t in target_ts {
        while cursor + 1 < gyro.len() && gyro[cursor + 1].timestamp < t {
            cursor += 1;
        }

        if cursor + 1 >= gyro.len() {
            // Target beyond gyro coverage: clamp to the last value.
            out.push(value(&gyro[gyro.len() - 1]));
            continue;
        }

        let p0 = &gyro[cursor];
        let p1 = &gyro[cursor + 1];
        let dt = p1.timestamp - p0.timestamp;
        let alpha = if dt > MIN_BRACKET_SECS {
            (t - p0.timestamp) / dt
        } else {
            0.0
        };

        out.push(value(p0) * (1.0 - alpha) + value(p1) * alpha);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gyro(rows: &[(f64, f64, f64, f64)]) -> Vec<GyroSample> {
        rows.iter()
            .map(|&(t, x, y, z)| GyroSample::new(t, x, y, z))
            .collect()
    }

    #[test]
    fn test_midpoint_interpolation() {
        let source = gyro(&[(0.0, 1.0, 2.0, 3.0), (1.0, 3.0, 4.0, 5.0)]);
        let out = resample_axis(&[0.5], &source, GyroAxis::X);
        assert_eq!(out, vec![2.0]);
    }

    #[test]
    fn test_exact_source_timestamps_reproduce_values() {
        let source = gyro(&[
            (0.0, 0.0, 1.0, 0.0),
            (0.1, 0.0, -2.0, 0.0),
            (0.25, 0.0, 4.0, 0.0),
        ]);
        let out = resample_axis(&[0.0, 0.1, 0.25], &source, GyroAxis::Y);
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - -2.0).abs() < 1e-12);
        assert!((out[2] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_beyond_coverage() {
        let source = gyro(&[(0.0, 0.0, 1.0, 0.0), (1.0, 0.0, 5.0, 0.0)]);
        let out = resample_axis(&[2.0, 10.0], &source, GyroAxis::Y);
        assert_eq!(out, vec![5.0, 5.0]);
    }

    #[test]
    fn test_coincident_bracket_uses_first_value() {
        let source = gyro(&[(1.0, 0.0, 3.0, 0.0), (1.0, 0.0, 9.0, 0.0)]);
        let out = resample_axis(&[1.0], &source, GyroAxis::Y);
        assert_eq!(out, vec![3.0]);
    }

    #[test]
    fn test_empty_inputs() {
        let source = gyro(&[(0.0, 1.0, 1.0, 1.0)]);
        assert!(resample_axis(&[], &source, GyroAxis::X).is_empty());
        assert!(resample_axis(&[0.5], &[], GyroAxis::X).is_empty());
    }

    #[test]
    fn test_output_length_matches_targets() {
        let source = gyro(&[(0.0, 0.0, 0.0, 0.0), (1.0, 1.0, 1.0, 1.0)]);
        let targets: Vec<f64> = (0..50).map(|i| i as f64 * 0.05).collect();
        let out = resample_axis(&targets, &source, GyroAxis::Z);
        assert_eq!(out.len(), targets.len());
    }

    #[test]
    fn test_uniform_magnitude_grid() {
        // 2 seconds of gyro at 100 Hz, constant magnitude 2.0
        let source: Vec<GyroSample> = (0..=200)
            .map(|i| GyroSample::new(i as f64 * 0.01, 2.0, 0.0, 0.0))
            .collect();
        let out = resample_magnitude_uniform(&source, 32.0);
        // 2 s at 32 Hz spans 65 grid points including both ends
        assert_eq!(out.len(), 65);
        assert!(out.iter().all(|v| (v - 2.0).abs() < 1e-9));
    }
}
