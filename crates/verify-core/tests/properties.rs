//! Algebraic properties of the scoring primitives.

use proptest::prelude::*;

use vericap_signal_model::sample::{GyroAxis, GyroSample};
use vericap_verify_core::correlate::pearson;
use vericap_verify_core::normalize::zscore;
use vericap_verify_core::resample::resample_axis;

fn bounded_series(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, len)
}

proptest! {
    #[test]
    fn pearson_is_symmetric(xy in bounded_series(3..64).prop_flat_map(|x| {
        let n = x.len();
        (Just(x), bounded_series(n..n + 1))
    })) {
        let (x, y) = xy;
        let a = pearson(&x, &y);
        let b = pearson(&y, &x);
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn pearson_is_bounded(xy in bounded_series(3..64).prop_flat_map(|x| {
        let n = x.len();
        (Just(x), bounded_series(n..n + 1))
    })) {
        let (x, y) = xy;
        let r = pearson(&x, &y);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
    }

    #[test]
    fn zscore_preserves_length(v in bounded_series(0..64)) {
        prop_assert_eq!(zscore(&v).len(), v.len());
    }

    #[test]
    fn zscore_is_idempotent_on_its_image(v in bounded_series(2..64)) {
        let once = zscore(&v);
        let twice = zscore(&once);
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn resample_at_source_timestamps_is_identity(
        values in bounded_series(2..32),
        deltas in prop::collection::vec(0.001f64..0.5, 31),
    ) {
        // Build a strictly increasing gyro series from positive deltas.
        let mut t = 0.0;
        let gyro: Vec<GyroSample> = values
            .iter()
            .zip(&deltas)
            .map(|(&v, &dt)| {
                let sample = GyroSample::new(t, 0.0, v, 0.0);
                t += dt;
                sample
            })
            .collect();

        let timestamps: Vec<f64> = gyro.iter().map(|s| s.timestamp).collect();
        let out = resample_axis(&timestamps, &gyro, GyroAxis::Y);

        prop_assert_eq!(out.len(), gyro.len());
        for (resampled, original) in out.iter().zip(&gyro) {
            prop_assert!((resampled - original.y).abs() < 1e-9);
        }
    }
}
