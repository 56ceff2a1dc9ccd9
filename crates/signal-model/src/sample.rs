//! Sample types for the gyro and visual-flow streams.

use serde::{Deserialize, Serialize};

/// A single gyroscope reading.
///
/// Timestamps are fractional seconds relative to the first sample of the
/// recording (the loader guarantees the first sample sits at zero).
/// Angular rates are whatever unit the device reports; only relative
/// shape matters downstream because both series are z-scored before
/// correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GyroSample {
    /// Seconds since the first gyro sample.
    pub timestamp: f64,
    /// Angular rate around the device X axis (pitch).
    pub x: f64,
    /// Angular rate around the device Y axis (yaw).
    pub y: f64,
    /// Angular rate around the device Z axis (roll).
    pub z: f64,
}

impl GyroSample {
    pub fn new(timestamp: f64, x: f64, y: f64, z: f64) -> Self {
        Self { timestamp, x, y, z }
    }

    /// Angular rate along the given axis.
    pub fn axis(&self, axis: GyroAxis) -> f64 {
        match axis {
            GyroAxis::X => self.x,
            GyroAxis::Y => self.y,
            GyroAxis::Z => self.z,
        }
    }

    /// Euclidean magnitude of the angular rate vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Gyroscope axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GyroAxis {
    X,
    Y,
    Z,
}

/// One aggregate optical-flow reading derived from a consecutive frame
/// pair (or loaded from a precomputed table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowSample {
    /// Seconds since recording start (`frame_index / fps` for video input).
    pub timestamp: f64,
    /// Mean horizontal motion over the central frame region (pixels/frame).
    pub flow_x: f64,
    /// Mean vertical motion over the central frame region (pixels/frame).
    pub flow_y: f64,
}

impl FlowSample {
    pub fn new(timestamp: f64, flow_x: f64, flow_y: f64) -> Self {
        Self {
            timestamp,
            flow_x,
            flow_y,
        }
    }

    /// Motion component along the given flow axis.
    pub fn axis(&self, axis: FlowAxis) -> f64 {
        match axis {
            FlowAxis::Horizontal => self.flow_x,
            FlowAxis::Vertical => self.flow_y,
        }
    }
}

/// Visual-flow axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowAxis {
    Horizontal,
    Vertical,
}

/// Which gyro axis is compared against which flow axis.
///
/// Rotation around the device Y axis (yaw) produces horizontal image
/// motion on a landscape-mounted camera; pitch produces vertical motion.
/// This is a camera-mounting convention, so it is configurable rather
/// than hard-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPairing {
    /// Yaw rate (gyro Y) against horizontal pan flow (flow X).
    #[default]
    YawToPan,
    /// Pitch rate (gyro X) against vertical tilt flow (flow Y).
    PitchToTilt,
    /// Evaluate both pairings and keep the stronger correlation.
    Auto,
}

impl AxisPairing {
    /// Concrete (gyro, flow) axis pairs to evaluate, in preference order.
    pub fn candidates(&self) -> Vec<(GyroAxis, FlowAxis)> {
        match self {
            AxisPairing::YawToPan => vec![(GyroAxis::Y, FlowAxis::Horizontal)],
            AxisPairing::PitchToTilt => vec![(GyroAxis::X, FlowAxis::Vertical)],
            AxisPairing::Auto => vec![
                (GyroAxis::Y, FlowAxis::Horizontal),
                (GyroAxis::X, FlowAxis::Vertical),
            ],
        }
    }

    /// Parse the kebab-case name used by the CLI and config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "yaw-to-pan" => Some(AxisPairing::YawToPan),
            "pitch-to-tilt" => Some(AxisPairing::PitchToTilt),
            "auto" => Some(AxisPairing::Auto),
            _ => None,
        }
    }
}
