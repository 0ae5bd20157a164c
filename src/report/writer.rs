//! Report persistence.
//!
//! Writes the formatted report verbatim to the destination path, creating or
//! truncating the file. Console display is the orchestrator's concern and has
//! no failure mode worth modeling.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Write `report` to `path`, byte for byte, with no added trailing content.
///
/// Fails with [`AnalysisError::WriteFailure`] carrying the underlying I/O
/// cause (permission, disk space, invalid path).
pub fn save_report(report: &str, path: &Path) -> Result<()> {
    fs::write(path, report).map_err(|source| AnalysisError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Report written to {}", path.display());
    Ok(())
}
