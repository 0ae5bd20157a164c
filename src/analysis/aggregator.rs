//! Aggregate statistics over the reading sequence.
//!
//! Computes the arithmetic mean of each numeric vital-sign field. Means are
//! undefined for an empty sequence, so aggregation is the one analysis step
//! that can fail.

use crate::error::{AnalysisError, Result};
use crate::models::{Reading, VitalAverages};

/// Compute the arithmetic mean of the five numeric fields.
///
/// Fails with [`AnalysisError::EmptyDataset`] if `readings` is empty. No
/// rounding is applied; callers decide how to render the values.
pub fn calculate_averages(readings: &[Reading]) -> Result<VitalAverages> {
    if readings.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let count = readings.len() as f64;

    Ok(VitalAverages {
        temperature: readings.iter().map(|r| r.temperature).sum::<f64>() / count,
        heart_rate: mean_of(readings, |r| r.heart_rate),
        glucose_level: mean_of(readings, |r| r.glucose_level),
        systolic_bp: mean_of(readings, |r| r.systolic_bp),
        diastolic_bp: mean_of(readings, |r| r.diastolic_bp),
    })
}

/// Mean of an integer field, computed in f64.
fn mean_of(readings: &[Reading], field: impl Fn(&Reading) -> u32) -> f64 {
    readings.iter().map(|r| f64::from(field(r))).sum::<f64>() / readings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reading(heart_rate: u32, systolic: u32, diastolic: u32, temp: f64, glucose: u32) -> Reading {
        Reading {
            patient_id: "P001".to_string(),
            timestamp: "2024-01-15 08:00".to_string(),
            heart_rate,
            systolic_bp: systolic,
            diastolic_bp: diastolic,
            temperature: temp,
            glucose_level: glucose,
            sensor_id: "S01".to_string(),
        }
    }

    #[test]
    fn test_averages_two_readings() {
        let readings = vec![
            make_reading(95, 135, 85, 99.1, 120),
            make_reading(80, 120, 78, 98.2, 100),
        ];

        let averages = calculate_averages(&readings).unwrap();

        assert_eq!(averages.heart_rate, 87.5);
        assert_eq!(averages.systolic_bp, 127.5);
        assert_eq!(averages.diastolic_bp, 81.5);
        assert!((averages.temperature - 98.65).abs() < 1e-9);
        assert_eq!(averages.glucose_level, 110.0);
    }

    #[test]
    fn test_average_of_single_reading_is_identity() {
        let readings = vec![make_reading(72, 118, 76, 98.6, 95)];

        let averages = calculate_averages(&readings).unwrap();

        assert_eq!(averages.heart_rate, 72.0);
        assert_eq!(averages.systolic_bp, 118.0);
        assert_eq!(averages.diastolic_bp, 76.0);
        assert_eq!(averages.temperature, 98.6);
        assert_eq!(averages.glucose_level, 95.0);
    }

    #[test]
    fn test_averages_within_field_bounds() {
        let readings = vec![
            make_reading(60, 100, 60, 97.0, 80),
            make_reading(100, 140, 90, 100.0, 130),
            make_reading(75, 125, 82, 98.4, 105),
        ];

        let averages = calculate_averages(&readings).unwrap();

        let min_hr = readings.iter().map(|r| r.heart_rate).min().unwrap();
        let max_hr = readings.iter().map(|r| r.heart_rate).max().unwrap();
        assert!(averages.heart_rate >= f64::from(min_hr));
        assert!(averages.heart_rate <= f64::from(max_hr));

        assert!(averages.temperature >= 97.0 && averages.temperature <= 100.0);
        assert!(averages.glucose_level >= 80.0 && averages.glucose_level <= 130.0);
        assert!(averages.systolic_bp >= 100.0 && averages.systolic_bp <= 140.0);
        assert!(averages.diastolic_bp >= 60.0 && averages.diastolic_bp <= 90.0);
    }

    #[test]
    fn test_empty_dataset_fails() {
        let err = calculate_averages(&[]).unwrap_err();

        assert!(matches!(err, AnalysisError::EmptyDataset));
    }
}
