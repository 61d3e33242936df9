use serde::Serialize;

use crate::domain::Observation;
use crate::pipeline::normalize::WorkingCopy;

/// A row with a negative value in one of the three numeric columns.
#[derive(Debug, Clone, Serialize)]
pub struct RangeViolation {
    /// Zero-based position of the row in the working copy.
    pub row_index: usize,
    /// The columns that carried a negative value.
    pub columns: Vec<&'static str>,
    pub row: Observation,
}

/// Selects rows where `Fish_Population`, `Average_Size(cm)`, or
/// `Water_Temperature(C)` is negative.
///
/// Diagnostic only: offending rows stay in the working copy untouched.
/// Negative water temperature counts as a violation even though polar sea
/// water can sit below zero; the source survey treats it as a sensor fault.
pub fn out_of_range(copy: &WorkingCopy) -> Vec<RangeViolation> {
    let mut violations = Vec::new();
    for (row_index, row) in copy.rows.iter().enumerate() {
        let mut columns = Vec::new();
        if row.fish_population.is_some_and(|v| v < 0) {
            columns.push("Fish_Population");
        }
        if row.average_size_cm.is_some_and(|v| v < 0.0) {
            columns.push("Average_Size(cm)");
        }
        if row.water_temperature_c.is_some_and(|v| v < 0.0) {
            columns.push("Water_Temperature(C)");
        }
        if !columns.is_empty() {
            violations.push(RangeViolation {
                row_index,
                columns,
                row: row.clone(),
            });
        }
    }
    violations
}
