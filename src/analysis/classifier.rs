//! Abnormality classification.
//!
//! Counts readings whose vitals strictly exceed fixed clinical cutoffs. The
//! three predicates are evaluated independently, so one reading can land in
//! several counts at once. Unlike aggregation, classification is well-defined
//! on an empty sequence: every count is zero.

use crate::models::{AbnormalCounts, Reading};

/// Clinical cutoffs above which a measurement counts as high.
///
/// Thresholds are passed explicitly rather than read from configuration; the
/// defaults are the fixed clinical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// High heart rate cutoff in bpm.
    pub heart_rate: u32,
    /// High systolic blood pressure cutoff in mmHg.
    pub systolic_bp: u32,
    /// High glucose cutoff in mg/dL.
    pub glucose_level: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            heart_rate: 90,
            systolic_bp: 130,
            glucose_level: 110,
        }
    }
}

/// Count readings strictly exceeding each threshold.
pub fn count_abnormal(readings: &[Reading], thresholds: &Thresholds) -> AbnormalCounts {
    AbnormalCounts {
        high_heart_rate: readings
            .iter()
            .filter(|r| r.heart_rate > thresholds.heart_rate)
            .count(),
        high_systolic_bp: readings
            .iter()
            .filter(|r| r.systolic_bp > thresholds.systolic_bp)
            .count(),
        high_glucose: readings
            .iter()
            .filter(|r| r.glucose_level > thresholds.glucose_level)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reading(heart_rate: u32, systolic: u32, glucose: u32) -> Reading {
        Reading {
            patient_id: "P001".to_string(),
            timestamp: "2024-01-15 08:00".to_string(),
            heart_rate,
            systolic_bp: systolic,
            diastolic_bp: 80,
            temperature: 98.6,
            glucose_level: glucose,
            sensor_id: "S01".to_string(),
        }
    }

    #[test]
    fn test_counts_are_independent() {
        // First reading is high on all three axes, second on none.
        let readings = vec![make_reading(95, 135, 120), make_reading(80, 120, 100)];

        let counts = count_abnormal(&readings, &Thresholds::default());

        assert_eq!(counts.high_heart_rate, 1);
        assert_eq!(counts.high_systolic_bp, 1);
        assert_eq!(counts.high_glucose, 1);
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        // Values exactly at the cutoff are not abnormal.
        let readings = vec![make_reading(90, 130, 110)];

        let counts = count_abnormal(&readings, &Thresholds::default());

        assert_eq!(counts, AbnormalCounts::default());
    }

    #[test]
    fn test_one_above_threshold_counts() {
        let readings = vec![make_reading(91, 131, 111)];

        let counts = count_abnormal(&readings, &Thresholds::default());

        assert_eq!(counts.high_heart_rate, 1);
        assert_eq!(counts.high_systolic_bp, 1);
        assert_eq!(counts.high_glucose, 1);
    }

    #[test]
    fn test_empty_sequence_yields_zero_counts() {
        let counts = count_abnormal(&[], &Thresholds::default());

        assert_eq!(counts, AbnormalCounts::default());
    }

    #[test]
    fn test_counts_bounded_by_total() {
        let readings = vec![
            make_reading(100, 140, 130),
            make_reading(110, 150, 140),
            make_reading(95, 135, 120),
        ];

        let counts = count_abnormal(&readings, &Thresholds::default());

        assert_eq!(counts.high_heart_rate, readings.len());
        assert_eq!(counts.high_systolic_bp, readings.len());
        assert_eq!(counts.high_glucose, readings.len());
    }

    #[test]
    fn test_custom_thresholds() {
        let readings = vec![make_reading(80, 120, 100)];
        let strict = Thresholds {
            heart_rate: 70,
            systolic_bp: 110,
            glucose_level: 90,
        };

        let counts = count_abnormal(&readings, &strict);

        assert_eq!(counts.high_heart_rate, 1);
        assert_eq!(counts.high_systolic_bp, 1);
        assert_eq!(counts.high_glucose, 1);
    }
}
