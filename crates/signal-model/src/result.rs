//! The per-verification outcome record.

use serde::{Deserialize, Serialize};

/// Outcome of a single `verify` call.
///
/// Created once per verification, immutable after construction, never
/// persisted by the pipeline itself. Failures are expressed here rather
/// than as errors: the pipeline always returns a result, with `success`
/// distinguishing a completed analysis from an aborted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Absolute Pearson correlation between visual flow and gyro, in [0, 1].
    pub score: f64,

    /// Normalized 0–100 confidence blending correlation and tremor
    /// corroboration.
    pub causality_score: f64,

    /// Whether 8–12 Hz physiological tremor was detected in the gyro.
    pub is_handheld: bool,

    /// Integrated spectral power in the tremor band.
    pub tremor_energy: f64,

    /// Seconds of flow signal covered by the analysis.
    pub duration_analyzed: f64,

    /// Whether the pipeline ran to completion.
    pub success: bool,

    /// Human-readable description of the outcome or the failing stage.
    pub message: String,
}

impl VerificationResult {
    /// A failure outcome with all metrics zeroed.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            causality_score: 0.0,
            is_handheld: false,
            tremor_energy: 0.0,
            duration_analyzed: 0.0,
            success: false,
            message: message.into(),
        }
    }

    /// Binary verdict for callers that need one. The threshold is a
    /// presentation-layer choice, not part of the pipeline contract.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.success && self.score > threshold
    }

    /// One-line summary for embedding hosts.
    pub fn summary(&self) -> String {
        format!(
            "Score: {:.4} | {} | {}",
            self.score,
            if self.success { "Success" } else { "Failed" },
            self.message
        )
    }
}
