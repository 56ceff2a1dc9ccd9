//! Video-derived flow source.
//!
//! Dense optical-flow extraction is an external collaborator, not part
//! of this core: a vision library decodes frames sequentially at the
//! container's reported frame rate, converts each to single-channel
//! intensity, computes a dense motion field between consecutive frames,
//! and averages it over the central 80% of the frame (10% margin cropped
//! on each side). This module only defines that capability contract and
//! adapts it to [`FlowSource`].

use std::path::Path;

use vericap_common::error::VericapResult;
use vericap_signal_model::sample::FlowSample;

use crate::source::FlowSource;

/// Frame rate assumed when container metadata is absent or non-positive.
pub const DEFAULT_FPS: f64 = 30.0;

/// External capability: turn a video file into a per-frame flow signal.
///
/// Implementations must timestamp each sample as `frame_index / fps`,
/// falling back to [`DEFAULT_FPS`] when the container reports no usable
/// rate, and must release decoder resources on every exit path. The
/// frame loop is inherently sequential (each motion field depends on the
/// previous decoded frame) and must not be parallelized.
pub trait VideoFlowExtractor {
    fn extract(&self, video: &Path) -> VericapResult<Vec<FlowSample>>;
}

/// Adapts a [`VideoFlowExtractor`] to the [`FlowSource`] boundary.
///
/// Built without an extractor (a workspace with no vision library
/// linked), every video input yields an empty signal, which the pipeline
/// reports as a flow-extraction failure.
pub struct VideoFlowSource {
    extractor: Option<Box<dyn VideoFlowExtractor>>,
}

impl VideoFlowSource {
    pub fn new(extractor: Option<Box<dyn VideoFlowExtractor>>) -> Self {
        Self { extractor }
    }
}

impl FlowSource for VideoFlowSource {
    fn flow_signal(&self, input: &Path) -> VericapResult<Vec<FlowSample>> {
        match &self.extractor {
            Some(extractor) => extractor.extract(input),
            None => {
                tracing::warn!(
                    "No video flow extractor registered; cannot decode {:?}",
                    input
                );
                Ok(vec![])
            }
        }
    }
}
