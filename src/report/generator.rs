//! Text report generation.
//!
//! Renders the computed averages, abnormality counts, and total reading
//! count into the fixed report layout. Output is byte-identical for
//! identical inputs: no timestamps, no locale-dependent formatting.

use crate::models::{AbnormalCounts, VitalAverages};

/// Generate the complete report text.
///
/// Averages render to one decimal place; abnormality counts render as plain
/// integers with their threshold annotations. Total over any input triple.
pub fn generate_report(
    averages: &VitalAverages,
    abnormal: &AbnormalCounts,
    total_readings: usize,
) -> String {
    let mut output = String::new();

    output.push_str("====Health Data Analysis Report====\n");
    output.push_str(&format!("Total Readings: {}\n\n", total_readings));

    output.push_str(">>Averages:\n");
    output.push_str(&format!(
        "Average Temperature: {:.1} °F\n",
        averages.temperature
    ));
    output.push_str(&format!(
        "Average Heart Rate: {:.1} bpm\n",
        averages.heart_rate
    ));
    output.push_str(&format!(
        "Average Glucose Level: {:.1} mg/dL\n",
        averages.glucose_level
    ));
    output.push_str(&format!(
        "Average Systolic BP: {:.1} mmHg\n",
        averages.systolic_bp
    ));
    output.push_str(&format!(
        "Average Diastolic BP: {:.1} mmHg\n",
        averages.diastolic_bp
    ));

    output.push_str(&format!(
        "High heart rate readings (>90 bpm): {}\n",
        abnormal.high_heart_rate
    ));
    output.push_str(&format!(
        "High systolic blood pressure readings (>130 mmHg): {}\n",
        abnormal.high_systolic_bp
    ));
    output.push_str(&format!(
        "High glucose level readings (>110 mg/dL): {}\n",
        abnormal.high_glucose
    ));

    output
}
