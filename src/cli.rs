//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// VitalStat - vital-sign CSV analyzer
///
/// Reads a CSV of periodic patient vital-sign readings, computes averages
/// and abnormality counts against fixed clinical thresholds, and writes a
/// plain-text report to console and file.
///
/// Examples:
///   vitalstat
///   vitalstat --input ward3.csv --output ward3_report.txt
///   vitalstat --config ./clinic.toml --verbose
///   vitalstat --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Input CSV file of vital-sign readings
    ///
    /// Defaults to health_data.csv in the current directory. Can also be set
    /// via the VITALSTAT_INPUT env var or .vitalstat.toml config.
    #[arg(short, long, value_name = "FILE", env = "VITALSTAT_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// Defaults to health_report.txt in the current directory. Can also be
    /// set via the VITALSTAT_OUTPUT env var or .vitalstat.toml config.
    #[arg(short, long, value_name = "FILE", env = "VITALSTAT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .vitalstat.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (suppress the incremental console narration)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .vitalstat.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate explicit config path if provided
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
