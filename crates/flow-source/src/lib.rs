//! VeriCap Flow Sources
//!
//! The verification pipeline consumes a per-frame scalar flow signal and
//! does not care whether it was computed live from decoded frames or
//! loaded from a precomputed table. This crate defines that boundary:
//! - **FlowSource:** the trait the pipeline calls
//! - **TableFlowSource:** direct pass-through of a flow table
//! - **VideoFlowSource:** adapter over an injected decoder capability
//! - **MemoryFlowSource:** synthetic in-memory signal for tests
//! - **Selection:** tabular extension means table, anything else is video

pub mod source;
pub mod video;

pub use source::{select_source, FlowSource, MemoryFlowSource, TableFlowSource};
pub use video::{VideoFlowExtractor, VideoFlowSource, DEFAULT_FPS};
