//! Pipeline orchestration: flow → gyro → align → score → verdict.
//!
//! Every failure path produces a `VerificationResult` with
//! `success = false` and a message naming the failing stage; the
//! pipeline never panics and never aborts the process.

use std::path::Path;

use vericap_common::config::VerificationDefaults;
use vericap_common::error::{VericapError, VericapResult};
use vericap_flow_source::{select_source, FlowSource, VideoFlowExtractor};
use vericap_signal_model::result::VerificationResult;
use vericap_signal_model::sample::{AxisPairing, FlowSample, GyroSample};
use vericap_signal_model::table;

use crate::correlate::pearson;
use crate::normalize::zscore;
use crate::resample::resample_axis;
use crate::tremor::{TremorAnalyzer, TremorConfig};

use serde::{Deserialize, Serialize};

/// Configuration for a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Which gyro axis is matched against which flow axis.
    pub axis_pairing: AxisPairing,

    /// Leading samples dropped from both aligned series when more than
    /// this many are present (flow/decoder warm-up transient).
    pub trim_samples: usize,

    /// Minimum aligned samples required after trimming; below this the
    /// correlation is statistically meaningless and the run fails
    /// explicitly instead of reporting a spuriously confident zero.
    pub min_aligned_samples: usize,

    /// Weight of the visual/inertial correlation in the causality score.
    pub correlation_weight: f64,

    /// Weight of the tremor corroboration in the causality score.
    pub tremor_weight: f64,

    /// Tremor analyzer calibration.
    pub tremor: TremorConfig,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            axis_pairing: AxisPairing::YawToPan,
            trim_samples: 2,
            min_aligned_samples: 3,
            correlation_weight: 0.7,
            tremor_weight: 0.3,
            tremor: TremorConfig::default(),
        }
    }
}

impl VerifyConfig {
    /// Build a run configuration from the persisted application defaults.
    pub fn from_defaults(defaults: &VerificationDefaults) -> VericapResult<Self> {
        let axis_pairing = AxisPairing::from_name(&defaults.axis_pairing).ok_or_else(|| {
            VericapError::config(format!(
                "unknown axis pairing {:?} (expected yaw-to-pan, pitch-to-tilt, or auto)",
                defaults.axis_pairing
            ))
        })?;
        Ok(Self {
            axis_pairing,
            trim_samples: defaults.trim_samples,
            correlation_weight: defaults.correlation_weight,
            tremor_weight: defaults.tremor_weight,
            tremor: TremorConfig {
                analysis_rate_hz: defaults.tremor.analysis_rate_hz,
                min_window_secs: defaults.tremor.min_window_secs,
                band_low_hz: defaults.tremor.band_low_hz,
                band_high_hz: defaults.tremor.band_high_hz,
                band_fraction_threshold: defaults.tremor.band_fraction_threshold,
                energy_floor: defaults.tremor.energy_floor,
            },
            ..Default::default()
        })
    }
}

/// The verification pipeline.
///
/// Owns no state across calls; each `verify` owns its buffers end to
/// end, so one verifier can serve concurrent calls targeting distinct
/// inputs.
pub struct MotionVerifier {
    config: VerifyConfig,
    tremor: TremorAnalyzer,
}

impl MotionVerifier {
    pub fn new(config: VerifyConfig) -> Self {
        let tremor = TremorAnalyzer::new(config.tremor.clone());
        Self { config, tremor }
    }

    pub fn with_defaults() -> Self {
        Self::new(VerifyConfig::default())
    }

    /// Verify using the extension-based source selection policy: tabular
    /// extensions read a precomputed flow table, anything else goes
    /// through the video extractor capability.
    pub fn verify_paths(
        &self,
        motion_input: &Path,
        gyro_input: &Path,
        extractor: Option<Box<dyn VideoFlowExtractor>>,
    ) -> VerificationResult {
        let source = select_source(motion_input, extractor);
        self.verify(source.as_ref(), motion_input, gyro_input)
    }

    /// Run the full pipeline against a flow source and a gyro table.
    pub fn verify(
        &self,
        source: &dyn FlowSource,
        motion_input: &Path,
        gyro_input: &Path,
    ) -> VerificationResult {
        let flow = match source.flow_signal(motion_input) {
            Ok(flow) => flow,
            Err(e) => {
                tracing::warn!("Flow extraction failed for {:?}: {}", motion_input, e);
                return VerificationResult::failure(format!(
                    "Could not extract optical flow from video. ({e})"
                ));
            }
        };

        let gyro = match table::load_gyro(gyro_input) {
            Ok(gyro) => gyro,
            Err(table::TableError::MalformedRow { line, message }) => {
                let e = VericapError::MalformedInput {
                    path: gyro_input.to_path_buf(),
                    line,
                    message,
                };
                tracing::warn!("Gyro load failed: {}", e);
                return VerificationResult::failure(format!("Could not load gyro data: {e}"));
            }
        };

        self.verify_samples(&flow, &gyro)
    }

    /// Core scoring over already-materialized signals. Exposed so tests
    /// and embedding hosts can inject synthetic series directly.
    pub fn verify_samples(
        &self,
        flow: &[FlowSample],
        gyro: &[GyroSample],
    ) -> VerificationResult {
        match self.score_samples(flow, gyro) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Verification aborted: {}", e);
                VerificationResult::failure(e.to_string())
            }
        }
    }

    fn score_samples(
        &self,
        flow: &[FlowSample],
        gyro: &[GyroSample],
    ) -> VericapResult<VerificationResult> {
        if flow.is_empty() {
            return Err(VericapError::flow_extraction(
                "no optical flow samples in input",
            ));
        }
        if gyro.is_empty() {
            return Err(VericapError::processing("gyro series is empty"));
        }

        let timestamps: Vec<f64> = flow.iter().map(|s| s.timestamp).collect();

        // Trim applies to every pairing identically, so the sample-count
        // check happens once up front.
        let trim = if flow.len() > self.config.trim_samples {
            self.config.trim_samples
        } else {
            0
        };
        let aligned = flow.len() - trim;
        if aligned < self.config.min_aligned_samples {
            return Err(VericapError::InsufficientData {
                needed: self.config.min_aligned_samples,
                got: aligned,
            });
        }

        // Evaluate each candidate pairing and keep the strongest signed
        // correlation by magnitude.
        let mut best: Option<f64> = None;
        for (gyro_axis, flow_axis) in self.config.axis_pairing.candidates() {
            let flow_series: Vec<f64> = flow.iter().map(|s| s.axis(flow_axis)).collect();
            let gyro_series = resample_axis(&timestamps, gyro, gyro_axis);

            let flow_norm = zscore(&flow_series[trim..]);
            let gyro_norm = zscore(&gyro_series[trim..]);
            let r = pearson(&flow_norm, &gyro_norm);

            tracing::debug!(
                "Pairing {:?}/{:?}: correlation {:.4}",
                gyro_axis,
                flow_axis,
                r
            );
            if best.map_or(true, |b: f64| r.abs() > b.abs()) {
                best = Some(r);
            }
        }
        let correlation = best.unwrap_or(0.0);

        // Tremor runs on the full untrimmed gyro stream, independent of
        // the correlation path.
        let verdict = self.tremor.analyze(gyro);

        let score = correlation.abs();
        let corroboration = if verdict.is_handheld {
            1.0
        } else {
            verdict.band_fraction.clamp(0.0, 1.0)
        };
        let causality_score = (100.0
            * (self.config.correlation_weight * score
                + self.config.tremor_weight * corroboration))
            .clamp(0.0, 100.0);

        Ok(VerificationResult {
            score,
            causality_score,
            is_handheld: verdict.is_handheld,
            tremor_energy: verdict.tremor_energy,
            duration_analyzed: timestamps[timestamps.len() - 1] - timestamps[0],
            success: true,
            message: format!("Analysis complete. Correlation: {correlation:.6}"),
        })
    }
}
