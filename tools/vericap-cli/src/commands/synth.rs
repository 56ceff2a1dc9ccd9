//! Generate a correlated mock flow/gyro CSV pair.
//!
//! The flow pans opposite to the gyro yaw (a camera panning right sees
//! the scene move left), so a verification run over the pair scores
//! near 1.0. Gyro timestamps are written as epoch-scale nanoseconds to
//! exercise the loader's unit auto-detection.

use std::f64::consts::PI;
use std::path::PathBuf;

pub fn run(duration: f64, fps: u32, tremor: bool, output: PathBuf) -> anyhow::Result<()> {
    if duration <= 0.0 || fps == 0 {
        anyhow::bail!("duration and fps must be positive");
    }

    let flow_path = output.join("mock_flow.csv");
    let gyro_path = output.join("mock_gyro.csv");

    let frames = (duration * fps as f64) as usize;
    let epoch_ns: u64 = 1_000_000_000;

    let mut flow = String::from("timestamp,flow_x,flow_y\n");
    let mut gyro = String::from("timestamp,x,y,z\n");

    for i in 0..frames {
        let t = i as f64 / fps as f64;
        let signal = (t * 3.0).sin();

        let gyro_y = signal;
        // Baseline on Z keeps the magnitude from rectifying the tremor
        // component around zero crossings.
        let gyro_z = if tremor {
            1.0 + 0.35 * (2.0 * PI * 10.0 * t).sin()
        } else {
            0.0
        };
        let flow_x = -signal * 20.0;

        flow.push_str(&format!("{t},{flow_x},0.0\n"));
        gyro.push_str(&format!(
            "{},0.0,{gyro_y},{gyro_z}\n",
            epoch_ns + (t * 1e9) as u64
        ));
    }

    std::fs::create_dir_all(&output)?;
    std::fs::write(&flow_path, flow)?;
    std::fs::write(&gyro_path, gyro)?;

    println!("Created {} and {}", flow_path.display(), gyro_path.display());
    println!(
        "  {} frames over {:.1}s at {} fps{}",
        frames,
        duration,
        fps,
        if tremor { ", with 10 Hz tremor" } else { "" }
    );

    Ok(())
}
