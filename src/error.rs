//! Error types for the analysis pipeline.
//!
//! Every error aborts the run; nothing is recovered or retried internally.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can abort an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input file does not exist at the given path.
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    /// A data line could not be parsed into a reading.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The input contained no data lines; averages are undefined.
    #[error("Dataset contains no readings")]
    EmptyDataset,

    /// The report could not be written to the destination path.
    #[error("Failed to write report to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for raw I/O errors that do not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
