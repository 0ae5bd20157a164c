//! Record loader for vital-sign CSV files.
//!
//! Parses a comma-delimited file with one header line into an ordered
//! sequence of [`Reading`]s. Parsing is positional: the header line is
//! skipped, never interpreted, and each data line must carry exactly eight
//! fields in the fixed column order. The load is all-or-nothing — the first
//! bad line aborts with an error naming its line number.

use std::fmt::Display;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::Reading;

/// Number of fields expected on every data line.
const FIELD_COUNT: usize = 8;

/// Load all readings from the CSV file at `path`.
///
/// Fails with [`AnalysisError::FileNotFound`] if the path does not exist and
/// with [`AnalysisError::MalformedRecord`] on the first field-count mismatch
/// or numeric conversion failure.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    if !path.exists() {
        return Err(AnalysisError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;

    // Quoting is disabled: embedded-comma escaping is not part of the input
    // format, so a quote character is ordinary field content. The reader is
    // flexible so short/long records reach our own field-count check instead
    // of a generic length error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut readings = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header and CSV line numbers
        // are 1-based.
        let line = (idx + 2) as u64;

        let record = result.map_err(|e| AnalysisError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;

        readings.push(parse_record(&record, line)?);
    }

    debug!("Loaded {} readings from {}", readings.len(), path.display());
    Ok(readings)
}

/// Parse one data line into a [`Reading`].
fn parse_record(record: &StringRecord, line: u64) -> Result<Reading> {
    if record.len() != FIELD_COUNT {
        return Err(AnalysisError::MalformedRecord {
            line,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    Ok(Reading {
        patient_id: record[0].to_string(),
        timestamp: record[1].to_string(),
        heart_rate: parse_field(record, 2, "heart rate", line)?,
        systolic_bp: parse_field(record, 3, "systolic blood pressure", line)?,
        diastolic_bp: parse_field(record, 4, "diastolic blood pressure", line)?,
        temperature: parse_field(record, 5, "temperature", line)?,
        glucose_level: parse_field(record, 6, "glucose level", line)?,
        sensor_id: record[7].to_string(),
    })
}

/// Parse a single numeric field, naming the field and line on failure.
fn parse_field<T>(record: &StringRecord, index: usize, name: &str, line: u64) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    record[index].parse().map_err(|e| AnalysisError::MalformedRecord {
        line,
        reason: format!("invalid {} value '{}': {}", name, &record[index], e),
    })
}
