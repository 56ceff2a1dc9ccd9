//! VeriCap Signal Model
//!
//! Defines the core data contracts for motion-consistency verification:
//! - **Samples:** Timestamped gyro and optical-flow readings
//! - **Tables:** Delimited-table loaders with timestamp-unit detection
//! - **Results:** The immutable per-verification outcome record
//!
//! All timestamps are fractional seconds relative to recording start.
//! Gyro timestamps are normalized at load time so the first sample sits
//! at exactly zero regardless of the device clock's unit or epoch.

pub mod result;
pub mod sample;
pub mod table;

pub use result::*;
pub use sample::*;
pub use table::*;
