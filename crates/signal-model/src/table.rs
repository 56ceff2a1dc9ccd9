//! Delimited-table loaders for recorded sensor streams.
//!
//! Both inputs are comma-separated tables with exactly one header line,
//! which is skipped unconditionally (no schema sniffing). Gyro rows are
//! `timestamp,x,y,z`; flow rows are `timestamp,flow_x[,flow_y,...]`.
//!
//! Device clocks emit either epoch-scale nanosecond counters or small
//! relative-second counters, and the files declare no unit. Gyro
//! timestamps are therefore auto-detected per row: raw magnitudes above
//! `1e8` are treated as nanoseconds. Either way the series is rebased so
//! the first sample sits at exactly zero.
//!
//! A field that fails to parse as numeric fails the whole load. Guessing
//! a default value would silently feed garbage into the correlation, so
//! the loaders never do it.

use std::path::Path;

use crate::sample::{FlowSample, GyroSample};

/// Raw timestamps above this magnitude are treated as epoch nanoseconds.
/// Set low enough (100 ms in ns) to catch early-boot monotonic clocks.
const NANOSECOND_THRESHOLD: f64 = 1e8;

/// Row-level parse failure. The line number counts from 1 and includes
/// the header line.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: {message}")]
    MalformedRow { line: usize, message: String },
}

impl TableError {
    pub fn line(&self) -> usize {
        match self {
            TableError::MalformedRow { line, .. } => *line,
        }
    }
}

/// Load a gyro table from disk.
///
/// An unopenable file yields an empty series after a warning — the
/// pipeline maps emptiness to a failure result, so this layer never
/// raises for missing inputs. Malformed rows are a hard error.
pub fn load_gyro(path: &Path) -> Result<Vec<GyroSample>, TableError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to open gyro table {:?}: {}", path, e);
            return Ok(vec![]);
        }
    };
    parse_gyro(&content)
}

/// Parse gyro table content. See [`load_gyro`].
pub fn parse_gyro(content: &str) -> Result<Vec<GyroSample>, TableError> {
    let mut samples = Vec::new();
    let mut t0: Option<f64> = None;

    for (index, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 4 {
            return Err(TableError::MalformedRow {
                line: line_number,
                message: format!("expected at least 4 columns, got {}", fields.len()),
            });
        }

        let raw_ts = parse_field(fields[0], line_number, "timestamp")?;
        let x = parse_field(fields[1], line_number, "x")?;
        let y = parse_field(fields[2], line_number, "y")?;
        let z = parse_field(fields[3], line_number, "z")?;

        let base = *t0.get_or_insert(raw_ts);
        let timestamp = if raw_ts.abs() > NANOSECOND_THRESHOLD {
            (raw_ts - base) / 1e9
        } else {
            raw_ts - base
        };

        samples.push(GyroSample::new(timestamp, x, y, z));
    }

    Ok(samples)
}

/// Load a precomputed flow table from disk.
///
/// Same error policy as [`load_gyro`]: unopenable file means empty
/// series, malformed row means a load-level error. Flow timestamps are
/// already relative to recording start, so no rebasing happens here. A
/// third column is read as `flow_y` when present; further columns are
/// ignored.
pub fn load_flow_table(path: &Path) -> Result<Vec<FlowSample>, TableError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to open flow table {:?}: {}", path, e);
            return Ok(vec![]);
        }
    };
    parse_flow_table(&content)
}

/// Parse flow table content. See [`load_flow_table`].
pub fn parse_flow_table(content: &str) -> Result<Vec<FlowSample>, TableError> {
    let mut samples = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(TableError::MalformedRow {
                line: line_number,
                message: format!("expected at least 2 columns, got {}", fields.len()),
            });
        }

        let timestamp = parse_field(fields[0], line_number, "timestamp")?;
        let flow_x = parse_field(fields[1], line_number, "flow_x")?;
        let flow_y = if fields.len() > 2 {
            parse_field(fields[2], line_number, "flow_y")?
        } else {
            0.0
        };

        samples.push(FlowSample::new(timestamp, flow_x, flow_y));
    }

    Ok(samples)
}

fn parse_field(raw: &str, line: usize, column: &str) -> Result<f64, TableError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TableError::MalformedRow {
            line,
            message: format!("column '{column}' is not numeric: {raw:?}"),
        })
}
