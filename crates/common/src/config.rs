//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::VericapResult;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default verification parameters.
    pub verification: VerificationDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default verification parameters.
///
/// These are calibration knobs, not contracts: the decision threshold and
/// the causality-score blending weights should be tuned against labeled
/// captures for a given device population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDefaults {
    /// Axis pairing name: "yaw-to-pan", "pitch-to-tilt", or "auto".
    pub axis_pairing: String,

    /// Correlation score above which a capture is reported consistent.
    pub decision_threshold: f64,

    /// Leading samples dropped from both aligned series.
    pub trim_samples: usize,

    /// Weight of the visual/inertial correlation in the causality score.
    pub correlation_weight: f64,

    /// Weight of the tremor corroboration in the causality score.
    pub tremor_weight: f64,

    /// Tremor-analysis calibration.
    pub tremor: TremorDefaults,
}

/// Persisted tremor-analysis calibration.
///
/// Mirrors the analyzer's runtime configuration field for field; the
/// analysis rate must exceed twice the band's upper edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TremorDefaults {
    /// Uniform analysis rate in Hz.
    pub analysis_rate_hz: f64,

    /// Minimum signal duration required for analysis (seconds).
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

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "vericap=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verification: VerificationDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for VerificationDefaults {
    fn default() -> Self {
        Self {
            axis_pairing: "yaw-to-pan".to_string(),
            decision_threshold: 0.7,
            trim_samples: 2,
            correlation_weight: 0.7,
            tremor_weight: 0.3,
            tremor: TremorDefaults::default(),
        }
    }
}

impl Default for TremorDefaults {
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

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> VericapResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> VericapResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("vericap").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.verification.axis_pairing, "yaw-to-pan");
        assert_eq!(config.verification.trim_samples, 2);
        assert!((config.verification.decision_threshold - 0.7).abs() < 1e-12);
        // Blending weights form a convex combination
        let sum = config.verification.correlation_weight + config.verification.tremor_weight;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tremor_defaults_are_analyzable() {
        let tremor = TremorDefaults::default();
        assert!((tremor.band_low_hz - 8.0).abs() < 1e-12);
        assert!((tremor.band_high_hz - 12.0).abs() < 1e-12);
        // Nyquist of the analysis grid must clear the band's upper edge
        assert!(tremor.analysis_rate_hz > 2.0 * tremor.band_high_hz);
    }

    #[test]
    fn test_save_to_writes_readable_json() {
        let path = std::env::temp_dir().join(format!(
            "vericap-config-{}.json",
            std::process::id()
        ));
        let config = AppConfig::default();
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: AppConfig = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.verification.axis_pairing, "yaw-to-pan");
        assert!((parsed.verification.tremor.band_fraction_threshold - 0.25).abs() < 1e-12);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.verification.decision_threshold,
            config.verification.decision_threshold
        );
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
