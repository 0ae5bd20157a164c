//! Data models for the vital-sign analyzer.
//!
//! This module contains the core data structures: one parsed input row and
//! the two derived summaries computed from the full sequence of rows.

/// One vital-sign reading for a patient at a point in time.
///
/// Constructed once by the loader from a single CSV line and immutable
/// thereafter. Field order mirrors the input column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Patient identifier (opaque short string).
    pub patient_id: String,
    /// Timestamp of the reading, kept as the raw string from the file.
    pub timestamp: String,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: u32,
    /// Diastolic blood pressure in mmHg.
    pub diastolic_bp: u32,
    /// Body temperature in °F.
    pub temperature: f64,
    /// Blood glucose level in mg/dL.
    pub glucose_level: u32,
    /// Identifier of the sensor that produced the reading.
    pub sensor_id: String,
}

/// Arithmetic means of the five numeric vital-sign fields.
///
/// Full floating-point precision is retained here; display rounding is the
/// report formatter's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalAverages {
    /// Mean temperature in °F.
    pub temperature: f64,
    /// Mean heart rate in bpm.
    pub heart_rate: f64,
    /// Mean glucose level in mg/dL.
    pub glucose_level: f64,
    /// Mean systolic blood pressure in mmHg.
    pub systolic_bp: f64,
    /// Mean diastolic blood pressure in mmHg.
    pub diastolic_bp: f64,
}

/// Counts of readings exceeding the fixed clinical thresholds.
///
/// The three predicates are independent: a single reading may contribute to
/// zero, one, two, or all three counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbnormalCounts {
    /// Readings with heart rate above the high-heart-rate cutoff.
    pub high_heart_rate: usize,
    /// Readings with systolic blood pressure above the hypertension cutoff.
    pub high_systolic_bp: usize,
    /// Readings with glucose level above the hyperglycemia cutoff.
    pub high_glucose: usize,
}
