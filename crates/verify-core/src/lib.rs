//! VeriCap Verification Core
//!
//! Checks that a capture's visual motion is physically consistent with
//! its gyroscope trace:
//! - **Resampling:** align the gyro stream onto flow timestamps
//! - **Normalization:** z-score with a degenerate-signal guard
//! - **Correlation:** Pearson correlation between the aligned series
//! - **Tremor:** 8–12 Hz physiological band energy as corroboration
//! - **Pipeline:** orchestration into a single `verify` call
//!
//! This crate is pure computation — all I/O happens behind the
//! flow-source boundary and the table loaders. Each `verify` call owns
//! its own buffers end to end, so concurrent calls from independent
//! threads are safe without locking.

pub mod correlate;
pub mod normalize;
pub mod pipeline;
pub mod resample;
pub mod tremor;

pub use pipeline::{MotionVerifier, VerifyConfig};
pub use tremor::{TremorAnalyzer, TremorConfig, TremorVerdict};
