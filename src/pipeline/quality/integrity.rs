use serde::Serialize;

use crate::domain::Observation;
use crate::pipeline::normalize::WorkingCopy;

/// A row that still carries nulls after default substitution.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityFinding {
    /// Zero-based position of the row in the working copy.
    pub row_index: usize,
    /// The columns that are null, in schema order.
    pub null_columns: Vec<&'static str>,
    pub row: Observation,
}

/// Re-scans the working copy for nulls in any of the nine columns.
///
/// Runs after remediation, so anything it finds was not covered by the two
/// default rules. Diagnostic only; nothing is auto-corrected.
pub fn residual_nulls(copy: &WorkingCopy) -> Vec<IntegrityFinding> {
    copy.rows
        .iter()
        .enumerate()
        .filter_map(|(row_index, row)| {
            let null_columns = row.null_columns();
            if null_columns.is_empty() {
                None
            } else {
                Some(IntegrityFinding {
                    row_index,
                    null_columns,
                    row: row.clone(),
                })
            }
        })
        .collect()
}
