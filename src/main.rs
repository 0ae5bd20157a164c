//! VitalStat - vital-sign CSV analyzer
//!
//! A CLI tool that ingests a CSV of periodic patient vital-sign readings,
//! computes average statistics and abnormality counts against fixed clinical
//! thresholds, and writes a plain-text report to console and file.
//!
//! Exit codes:
//!   0 - Success (report generated and saved)
//!   1 - Runtime error (missing input, malformed record, empty dataset,
//!       write failure)

mod analysis;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod report;

use analysis::Thresholds;
use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use models::{AbnormalCounts, VitalAverages};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("VitalStat v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis
    match run_analysis(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .vitalstat.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".vitalstat.toml");

    if path.exists() {
        eprintln!("⚠️  .vitalstat.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .vitalstat.toml")?;

    println!("✅ Created .vitalstat.toml with default settings.");
    println!("   Edit it to customize the input and output paths.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow. Returns the process exit code.
///
/// Fixed sequence: load → aggregate → classify → format → display → persist.
/// A failure in load or aggregate aborts before classification; a sink
/// failure aborts after the report has already been displayed.
fn run_analysis(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let input_path = config.input.path;
    let output_path = config.report.output;

    // Step 1: Load the readings
    println!("📥 Loading readings from {}", input_path.display());
    let readings = loader::load_readings(&input_path)?;
    info!("Loaded {} readings", readings.len());

    // Step 2: Aggregate statistics (fails fast on an empty dataset)
    let averages = analysis::calculate_averages(&readings)?;
    if !args.quiet {
        print_averages(&averages);
    }

    // Step 3: Count abnormal readings
    let thresholds = Thresholds::default();
    let abnormal = analysis::count_abnormal(&readings, &thresholds);
    if !args.quiet {
        print_abnormal(&abnormal, &thresholds);
    }

    // Step 4: Build and display the report
    let total_readings = readings.len();
    let report_text = report::generate_report(&averages, &abnormal, total_readings);
    println!("{}", report_text);

    // Step 5: Persist the report (the display above is not rolled back if
    // this fails)
    report::save_report(&report_text, &output_path)?;
    println!("✅ Report saved to: {}", output_path.display());

    Ok(0)
}

/// Print the averages section of the console narration.
///
/// Console values render to two decimal places; the report file rounds to
/// one. The discrepancy is intentional and preserved.
fn print_averages(averages: &VitalAverages) {
    println!("\n📊 Average vital signs:");
    println!("   Average Temperature: {:.2} °F", averages.temperature);
    println!("   Average Heart Rate: {:.2} bpm", averages.heart_rate);
    println!("   Average Glucose Level: {:.2} mg/dL", averages.glucose_level);
    println!("   Average Systolic BP: {:.2} mmHg", averages.systolic_bp);
    println!("   Average Diastolic BP: {:.2} mmHg", averages.diastolic_bp);
}

/// Print the abnormal-readings section of the console narration.
fn print_abnormal(abnormal: &AbnormalCounts, thresholds: &Thresholds) {
    println!("\n🚨 Abnormal readings:");
    println!(
        "   High heart rate readings (>{} bpm): {}",
        thresholds.heart_rate, abnormal.high_heart_rate
    );
    println!(
        "   High systolic blood pressure readings (>{} mmHg): {}",
        thresholds.systolic_bp, abnormal.high_systolic_bp
    );
    println!(
        "   High glucose level readings (>{} mg/dL): {}",
        thresholds.glucose_level, abnormal.high_glucose
    );
    println!();
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .vitalstat.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
