//! Physiological tremor detection on the raw gyro stream.
//!
//! Genuine handheld captures carry involuntary hand tremor concentrated
//! in the 8–12 Hz band. A tripod, a gimbal, or replayed footage with
//! fabricated gyro data rarely reproduces it, which makes band energy an
//! independent corroboration signal next to the flow/gyro correlation.
//!
//! The analyzer resamples the gyro magnitude onto a uniform grid (the
//! rate must exceed twice the band's upper edge), removes the mean,
//! applies a Hann window, and integrates a direct-DFT power spectrum
//! inside and outside the band.

use serde::{Deserialize, Serialize};

use vericap_signal_model::sample::GyroSample;

use crate::resample::resample_magnitude_uniform;

/// Calibration parameters for tremor analysis.
///
/// The fraction threshold and energy floor are calibration values, not
/// contracts; tune them against labeled captures for a device population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TremorConfig {
    /// Uniform analysis rate in Hz. Must exceed twice `band_high_hz`.
    pub analysis_rate_hz: f64,

    /// Minimum signal duration required for analysis (seconds). Shorter
    /// series degrade gracefully to a not-handheld verdict.
    pub min_window_secs: f64,

    /// Lower edge of the tremor band (Hz).
    pub band_low_hz: f64,

    /// Upper edge of the tremor band (Hz).
    pub band_high_hz: f64,

    /// Band-to-total energy fraction above which the capture counts as
    /// handheld.
    pub band_fraction_threshold: f64,

    /// Absolute band-energy floor rejecting near-silent signals.
    pub energy_floor: f64,
}

impl Default for TremorConfig {
    fn default() -> Self {
        Self {
            analysis_rate_hz: 32.0,
            min_window_secs: 2.0,
            band_low_hz: 8.0,
            band_high_hz: 12.0,
            band_fraction_threshold: 0.25,
            energy_floor: 1e-4,
        }
    }
}

/// Outcome of the tremor analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TremorVerdict {
    /// Whether the band energy clears both thresholds.
    pub is_handheld: bool,

    /// Integrated spectral power in the tremor band.
    pub tremor_energy: f64,

    /// Band energy as a fraction of total spectral power.
    pub band_fraction: f64,
}

impl TremorVerdict {
    fn silent() -> Self {
        Self {
            is_handheld: false,
            tremor_energy: 0.0,
            band_fraction: 0.0,
        }
    }
}

/// Spectral band-energy analyzer for the gyro magnitude signal.
pub struct TremorAnalyzer {
    config: TremorConfig,
}

impl TremorAnalyzer {
    pub fn new(config: TremorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(TremorConfig::default())
    }

    /// Analyze the full gyro series for tremor-band energy.
    ///
    /// Independent of the correlation path: runs on the raw, untrimmed
    /// gyro stream. Series shorter than one analysis window yield a
    /// not-handheld verdict with zero energy.
    pub fn analyze(&self, gyro: &[GyroSample]) -> TremorVerdict {
        let magnitude = resample_magnitude_uniform(gyro, self.config.analysis_rate_hz);

        let min_len = (self.config.min_window_secs * self.config.analysis_rate_hz) as usize;
        if magnitude.len() < min_len.max(4) {
            tracing::debug!(
                "Gyro series too short for tremor analysis: {} uniform samples",
                magnitude.len()
            );
            return TremorVerdict::silent();
        }

        let centered = remove_mean(&magnitude);
        let windowed = hann_window(&centered);
        let spectrum = power_spectrum(&windowed);

        let bin_hz = self.config.analysis_rate_hz / windowed.len() as f64;
        let mut band = 0.0;
        let mut total = 0.0;
        // Skip the DC bin; mean removal leaves it near zero anyway.
        for (k, power) in spectrum.iter().enumerate().skip(1) {
            let freq = k as f64 * bin_hz;
            total += *power;
            if freq >= self.config.band_low_hz && freq <= self.config.band_high_hz {
                band += *power;
            }
        }

        if total <= 0.0 {
            return TremorVerdict::silent();
        }

        let band_fraction = band / total;
        let is_handheld = band_fraction > self.config.band_fraction_threshold
            && band > self.config.energy_floor;

        TremorVerdict {
            is_handheld,
            tremor_energy: band,
            band_fraction,
        }
    }
}

fn remove_mean(values: &[f64]) -> Vec<f64> {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| v - mean).collect()
}

fn hann_window(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let w = 0.5
                * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / (n - 1) as f64).cos());
            v * w
        })
        .collect()
}

/// One-sided power spectrum by direct DFT, bins `0..=n/2`.
///
/// The analysis grid is short (a few hundred samples at 32 Hz), so the
/// O(n²) transform stays well under a millisecond and avoids pulling in
/// an FFT dependency.
fn power_spectrum(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut spectrum = Vec::with_capacity(n / 2 + 1);
    for k in 0..=n / 2 {
        let mut re = 0.0;
        let mut im = 0.0;
        for (i, v) in values.iter().enumerate() {
            let angle = 2.0 * std::f64::consts::PI * k as f64 * i as f64 / n as f64;
            re += v * angle.cos();
            im -= v * angle.sin();
        }
        spectrum.push((re * re + im * im) / (n as f64 * n as f64));
    }
    spectrum
}
