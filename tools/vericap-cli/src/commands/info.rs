//! Show basic statistics for a gyro or flow table.

use std::path::PathBuf;

use vericap_signal_model::table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    Gyro,
    Flow,
}

/// Decide how to interpret a table from its header line.
///
/// Column count alone cannot distinguish the kinds: a flow table with
/// extra columns also has four numeric fields per row and would parse as
/// gyro. A `flow*` column name wins; otherwise four or more columns
/// means gyro.
fn sniff_kind(header: &str) -> TableKind {
    let fields: Vec<String> = header
        .split(',')
        .map(|f| f.trim().to_ascii_lowercase())
        .collect();
    if fields.iter().any(|f| f.starts_with("flow")) {
        return TableKind::Flow;
    }
    if fields.len() >= 4 {
        TableKind::Gyro
    } else {
        TableKind::Flow
    }
}

fn print_stats(samples: usize, first_ts: f64, last_ts: f64) {
    let duration = last_ts - first_ts;
    println!("  Samples: {samples}");
    println!("  Duration: {duration:.3}s");
    if duration > 0.0 && samples > 1 {
        println!("  Mean rate: {:.1} Hz", (samples - 1) as f64 / duration);
    }
}

pub fn run(table_path: PathBuf) -> anyhow::Result<()> {
    println!("Inspecting: {}", table_path.display());

    let content = std::fs::read_to_string(&table_path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", table_path.display()))?;
    let header = content.lines().next().unwrap_or("");

    match sniff_kind(header) {
        TableKind::Gyro => {
            let gyro = table::parse_gyro(&content)?;
            if gyro.is_empty() {
                anyhow::bail!("No data rows found in {}", table_path.display());
            }
            println!("  Kind: gyro (timestamp,x,y,z)");
            print_stats(
                gyro.len(),
                gyro[0].timestamp,
                gyro[gyro.len() - 1].timestamp,
            );
        }
        TableKind::Flow => {
            let flow = table::parse_flow_table(&content)?;
            if flow.is_empty() {
                anyhow::bail!("No data rows found in {}", table_path.display());
            }
            println!("  Kind: flow (timestamp,flow_x[,flow_y])");
            print_stats(
                flow.len(),
                flow[0].timestamp,
                flow[flow.len() - 1].timestamp,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_gyro_headers() {
        assert_eq!(sniff_kind("timestamp,x,y,z"), TableKind::Gyro);
        assert_eq!(sniff_kind("timestamp,x,y,z,temperature"), TableKind::Gyro);
    }

    #[test]
    fn test_sniff_flow_headers() {
        assert_eq!(sniff_kind("timestamp,flow_x"), TableKind::Flow);
        assert_eq!(sniff_kind("timestamp,flow_x,flow_y"), TableKind::Flow);
        assert_eq!(sniff_kind("Timestamp,Flow_X,Flow_Y"), TableKind::Flow);
    }

    #[test]
    fn test_sniff_wide_flow_table_is_not_gyro() {
        // Four columns but named flow: must not be misread as gyro.
        assert_eq!(
            sniff_kind("timestamp,flow_x,flow_y,confidence"),
            TableKind::Flow
        );
    }

    #[test]
    fn test_sniff_short_unnamed_header_defaults_to_flow() {
        assert_eq!(sniff_kind("t,dx"), TableKind::Flow);
    }
}
