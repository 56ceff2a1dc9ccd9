//! The flow-source boundary and its table/memory implementations.

use std::path::Path;

use vericap_common::error::{VericapError, VericapResult};
use vericap_signal_model::sample::FlowSample;
use vericap_signal_model::table::{self, TableError};

use crate::video::{VideoFlowExtractor, VideoFlowSource};

/// File extensions treated as precomputed flow tables.
const TABLE_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Abstract interface for anything that can produce the per-frame flow
/// signal for a motion input.
pub trait FlowSource {
    /// Produce `(timestamp, flow_x, flow_y)` samples for the given input.
    ///
    /// An empty vec means the input could not be opened or contained no
    /// usable frames; the pipeline maps that to a failure result rather
    /// than an error.
    fn flow_signal(&self, input: &Path) -> VericapResult<Vec<FlowSample>>;
}

/// Flow signal read from a precomputed delimited table.
pub struct TableFlowSource;

impl FlowSource for TableFlowSource {
    fn flow_signal(&self, input: &Path) -> VericapResult<Vec<FlowSample>> {
        table::load_flow_table(input).map_err(|e| match e {
            TableError::MalformedRow { line, message } => VericapError::MalformedInput {
                path: input.to_path_buf(),
                line,
                message,
            },
        })
    }
}

/// In-memory flow signal for tests and synthetic evaluation.
pub struct MemoryFlowSource {
    samples: Vec<FlowSample>,
}

impl MemoryFlowSource {
    pub fn new(samples: Vec<FlowSample>) -> Self {
        Self { samples }
    }
}

impl FlowSource for MemoryFlowSource {
    fn flow_signal(&self, _input: &Path) -> VericapResult<Vec<FlowSample>> {
        Ok(self.samples.clone())
    }
}

/// Pick the flow-source variant for an input path.
///
/// Tabular extensions use the precomputed table; anything else is
/// treated as video and handed to the extractor capability (which may
/// be absent, in which case video inputs produce an empty signal).
pub fn select_source(
    input: &Path,
    extractor: Option<Box<dyn VideoFlowExtractor>>,
) -> Box<dyn FlowSource> {
    let is_table = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if is_table {
        Box::new(TableFlowSource)
    } else {
        Box::new(VideoFlowSource::new(extractor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("vericap-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_memory_source_returns_samples() {
        let samples = vec![
            FlowSample::new(0.0, 1.0, 0.0),
            FlowSample::new(0.033, -1.0, 0.0),
        ];
        let source = MemoryFlowSource::new(samples.clone());
        let signal = source.flow_signal(Path::new("ignored")).unwrap();
        assert_eq!(signal, samples);
    }

    #[test]
    fn test_table_source_reads_flow_table() {
        let path = unique_temp_path("flow-table.csv");
        std::fs::write(&path, "timestamp,flow_x,flow_y\n0.0,2.5,0.0\n0.033,-2.5,0.0\n").unwrap();

        let source = TableFlowSource;
        let signal = source.flow_signal(&path).unwrap();
        assert_eq!(signal.len(), 2);
        assert_eq!(signal[0].flow_x, 2.5);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_table_source_missing_file_is_empty() {
        let source = TableFlowSource;
        let signal = source
            .flow_signal(Path::new("/nonexistent/flow.csv"))
            .unwrap();
        assert!(signal.is_empty());
    }

    #[test]
    fn test_table_source_malformed_is_error() {
        let path = unique_temp_path("flow-bad.csv");
        std::fs::write(&path, "timestamp,flow_x\n0.0,garbage\n").unwrap();

        let source = TableFlowSource;
        let err = source.flow_signal(&path).unwrap_err();
        assert!(matches!(err, VericapError::MalformedInput { line: 2, .. }));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_selection_policy_by_extension() {
        // Table extensions route to the table source, which treats a
        // missing file as an empty signal rather than an error.
        let table = select_source(Path::new("capture.CSV"), None);
        assert!(table
            .flow_signal(Path::new("/nonexistent/capture.CSV"))
            .unwrap()
            .is_empty());

        // Video inputs without a registered extractor yield an empty
        // signal (the pipeline reports a flow-extraction failure).
        let video = select_source(Path::new("capture.mp4"), None);
        assert!(video
            .flow_signal(Path::new("/nonexistent/capture.mp4"))
            .unwrap()
            .is_empty());
    }
}
