//! Run the verification pipeline and print the report.

use std::path::PathBuf;

use vericap_common::config::VerificationDefaults;
use vericap_signal_model::sample::AxisPairing;
use vericap_verify_core::{MotionVerifier, VerifyConfig};

pub fn run(
    motion_input: PathBuf,
    gyro_csv: PathBuf,
    threshold: Option<f64>,
    pairing: Option<String>,
    json: bool,
    defaults: &VerificationDefaults,
) -> anyhow::Result<()> {
    // Flags override the persisted defaults.
    let threshold = threshold.unwrap_or(defaults.decision_threshold);
    let mut config = VerifyConfig::from_defaults(defaults)?;
    if let Some(name) = pairing {
        config.axis_pairing = AxisPairing::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("Unknown axis pairing: {name}"))?;
    }
    let verifier = MotionVerifier::new(config);

    // No vision library is linked into the CLI; video inputs require an
    // embedding host that registers an extractor. Flow tables work
    // everywhere.
    let result = verifier.verify_paths(&motion_input, &gyro_csv, None);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !result.success {
        eprintln!("FAILURE: {}", result.message);
        std::process::exit(1);
    }

    // Structured line output for easy parsing by wrapping services.
    println!("ANALYZED_AT: {}", chrono::Utc::now().to_rfc3339());
    println!("SUCCESS: {}", result.message);
    println!("SCORE: {:.6}", result.score);
    println!("CAUSALITY_SCORE: {:.2}", result.causality_score);
    println!("IS_HANDHELD: {}", result.is_handheld);
    println!("TREMOR_ENERGY: {:.6}", result.tremor_energy);
    println!("DURATION: {:.3}s", result.duration_analyzed);

    if result.is_consistent(threshold) {
        println!("VERDICT: REAL/CONSISTENT");
    } else {
        println!("VERDICT: FAKE/INCONSISTENT");
    }

    Ok(())
}
