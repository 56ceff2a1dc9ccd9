//! VeriCap CLI — verify recorded captures against their gyro traces.
//!
//! Usage:
//!   vericap verify <MOTION_INPUT> <GYRO_CSV>   Run the verification pipeline
//!   vericap synth [OPTIONS]                    Generate synthetic test data
//!   vericap info <TABLE>                       Describe a recorded table

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "vericap",
    about = "Motion-consistency verification for recorded video",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a capture's visual motion against its gyro trace
    Verify {
        /// Video file or precomputed flow table (.csv/.tsv/.txt)
        motion_input: PathBuf,

        /// Gyro table: timestamp,x,y,z with one header line
        gyro_csv: PathBuf,

        /// Decision threshold on the correlation score (defaults to the
        /// config file's value, 0.7 out of the box)
        #[arg(long)]
        threshold: Option<f64>,

        /// Axis pairing: yaw-to-pan|pitch-to-tilt|auto (defaults to the
        /// config file's value)
        #[arg(long)]
        pairing: Option<String>,

        /// Emit the result as JSON instead of the line report
        #[arg(long)]
        json: bool,
    },

    /// Generate a correlated mock flow/gyro CSV pair
    Synth {
        /// Recording duration in seconds
        #[arg(long, default_value = "3.0")]
        duration: f64,

        /// Frame rate of the mock flow signal
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Superimpose a 10 Hz tremor component on the gyro
        #[arg(long)]
        tremor: bool,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show basic statistics for a gyro or flow table
    Info {
        /// Path to the table
        table: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = vericap_common::config::AppConfig::load();

    // Initialize logging from the config file, with --verbose overriding
    // the level.
    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    vericap_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Verify {
            motion_input,
            gyro_csv,
            threshold,
            pairing,
            json,
        } => commands::verify::run(
            motion_input,
            gyro_csv,
            threshold,
            pairing,
            json,
            &app_config.verification,
        ),
        Commands::Synth {
            duration,
            fps,
            tremor,
            output,
        } => commands::synth::run(duration, fps, tremor, output),
        Commands::Info { table } => commands::info::run(table),
    }
}
