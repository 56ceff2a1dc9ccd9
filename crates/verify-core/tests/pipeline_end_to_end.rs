//! End-to-end pipeline tests over real files and synthetic signals.

use std::path::{Path, PathBuf};

use vericap_flow_source::MemoryFlowSource;
use vericap_signal_model::sample::FlowSample;
use vericap_verify_core::MotionVerifier;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vericap-e2e-{}-{}", std::process::id(), name))
}

/// Anti-phase sinusoid pair as CSV content: flow pans opposite to yaw,
/// gyro timestamps in epoch nanoseconds to exercise unit detection.
fn write_sinusoid_pair(flow_path: &Path, gyro_path: &Path, samples: usize) {
    let fps = 30.0;
    let mut flow = String::from("timestamp,flow_x,flow_y\n");
    let mut gyro = String::from("timestamp,x,y,z\n");
    let epoch_ns: u64 = 1_000_000_000;

    for i in 0..samples {
        let t = i as f64 / fps;
        let signal = (t * 3.0).sin();
        flow.push_str(&format!("{t},{},{}\n", -signal * 20.0, 0.0));
        gyro.push_str(&format!(
            "{},{},{},{}\n",
            epoch_ns + (t * 1e9) as u64,
            0.0,
            signal,
            0.0
        ));
    }

    std::fs::write(flow_path, flow).unwrap();
    std::fs::write(gyro_path, gyro).unwrap();
}

#[test]
fn correlated_tables_verify_with_high_score() {
    let flow_path = temp_path("flow.csv");
    let gyro_path = temp_path("gyro.csv");
    write_sinusoid_pair(&flow_path, &gyro_path, 90);

    let result = MotionVerifier::with_defaults().verify_paths(&flow_path, &gyro_path, None);
    assert!(result.success, "message: {}", result.message);
    assert!(result.score > 0.98, "score was {}", result.score);
    assert!(result.duration_analyzed > 2.9);

    std::fs::remove_file(&flow_path).ok();
    std::fs::remove_file(&gyro_path).ok();
}

#[test]
fn header_only_gyro_reports_gyro_failure() {
    let flow_path = temp_path("flow-ok.csv");
    let gyro_path = temp_path("gyro-empty.csv");
    write_sinusoid_pair(&flow_path, &temp_path("gyro-unused.csv"), 60);
    std::fs::write(&gyro_path, "timestamp,x,y,z\n").unwrap();

    let result = MotionVerifier::with_defaults().verify_paths(&flow_path, &gyro_path, None);
    assert!(!result.success);
    assert!(result.message.contains("gyro"), "message: {}", result.message);

    std::fs::remove_file(&flow_path).ok();
    std::fs::remove_file(&gyro_path).ok();
    std::fs::remove_file(temp_path("gyro-unused.csv")).ok();
}

#[test]
fn malformed_gyro_row_reports_gyro_failure() {
    let flow_path = temp_path("flow-ok2.csv");
    let gyro_path = temp_path("gyro-bad.csv");
    write_sinusoid_pair(&flow_path, &temp_path("gyro-unused2.csv"), 60);
    std::fs::write(&gyro_path, "timestamp,x,y,z\n0.0,0.1,abc,0.3\n").unwrap();

    let result = MotionVerifier::with_defaults().verify_paths(&flow_path, &gyro_path, None);
    assert!(!result.success);
    assert!(result.message.contains("Could not load gyro data"));

    std::fs::remove_file(&flow_path).ok();
    std::fs::remove_file(&gyro_path).ok();
    std::fs::remove_file(temp_path("gyro-unused2.csv")).ok();
}

#[test]
fn missing_flow_table_reports_flow_failure() {
    let gyro_path = temp_path("gyro-ok.csv");
    write_sinusoid_pair(&temp_path("flow-unused.csv"), &gyro_path, 60);

    let result = MotionVerifier::with_defaults().verify_paths(
        Path::new("/nonexistent/flow.csv"),
        &gyro_path,
        None,
    );
    assert!(!result.success);
    assert!(result.message.contains("optical flow"));

    std::fs::remove_file(&gyro_path).ok();
    std::fs::remove_file(temp_path("flow-unused.csv")).ok();
}

#[test]
fn missing_video_never_crashes() {
    let gyro_path = temp_path("gyro-ok2.csv");
    write_sinusoid_pair(&temp_path("flow-unused2.csv"), &gyro_path, 60);

    // No extractor registered: video inputs fail gracefully.
    let result = MotionVerifier::with_defaults().verify_paths(
        Path::new("/nonexistent/capture.mp4"),
        &gyro_path,
        None,
    );
    assert!(!result.success);
    assert!(result.message.contains("optical flow"));

    std::fs::remove_file(&gyro_path).ok();
    std::fs::remove_file(temp_path("flow-unused2.csv")).ok();
}

#[test]
fn memory_source_drives_pipeline() {
    let fps = 30.0;
    let samples: Vec<FlowSample> = (0..90)
        .map(|i| {
            let t = i as f64 / fps;
            FlowSample::new(t, (t * 3.0).sin() * 12.0, 0.0)
        })
        .collect();
    let source = MemoryFlowSource::new(samples);

    let gyro_path = temp_path("gyro-mem.csv");
    let mut gyro = String::from("timestamp,x,y,z\n");
    for i in 0..90 {
        let t = i as f64 / fps;
        gyro.push_str(&format!("{t},0.0,{},0.0\n", (t * 3.0).sin()));
    }
    std::fs::write(&gyro_path, gyro).unwrap();

    let result =
        MotionVerifier::with_defaults().verify(&source, Path::new("synthetic"), &gyro_path);
    assert!(result.success);
    assert!(result.score > 0.99);

    std::fs::remove_file(&gyro_path).ok();
}
