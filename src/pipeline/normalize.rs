use tracing::debug;

use crate::domain::Observation;
use crate::error::{PipelineError, Result};
use crate::pipeline::loader::RawTable;

/// The typed working copy produced by the one-time type coercion.
///
/// This is the final artifact of the cleaning stages and the input to every
/// report. All mutation after coercion (default substitution) happens in
/// place on this copy.
#[derive(Debug, Clone)]
pub struct WorkingCopy {
    pub rows: Vec<Observation>,
}

impl WorkingCopy {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Strips leading and trailing whitespace from the six designated text
/// columns, in place. Idempotent. A value that trims to the empty string
/// becomes null so downstream checks see it as missing.
pub fn trim_text_fields(table: &mut RawTable) {
    for row in &mut table.rows {
        trim_field(&mut row.species_name);
        trim_field(&mut row.region);
        trim_field(&mut row.breeding_season);
        trim_field(&mut row.fishing_method);
        trim_field(&mut row.overfishing_risk);
        trim_field(&mut row.water_pollution_level);
    }
}

fn trim_field(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *field = Some(trimmed.to_string());
        }
    }
}

/// Converts the raw working copy into its typed form: `Fish_Population` as
/// an integer, `Average_Size(cm)` and `Water_Temperature(C)` as floats.
///
/// This is the schema change, not a per-row cleaning rule: integer literals
/// convert losslessly (`12` becomes `12.0`) and thousands separators are
/// stripped, but any other non-numeric cell aborts the run with a
/// `TypeCoercion` error.
pub fn coerce_types(table: RawTable) -> Result<WorkingCopy> {
    let mut rows = Vec::with_capacity(table.rows.len());
    for (index, raw) in table.rows.into_iter().enumerate() {
        rows.push(Observation {
            species_name: raw.species_name,
            region: raw.region,
            breeding_season: raw.breeding_season,
            fishing_method: raw.fishing_method,
            fish_population: parse_integer(raw.fish_population, index, "Fish_Population")?,
            average_size_cm: parse_float(raw.average_size_cm, index, "Average_Size(cm)")?,
            overfishing_risk: raw.overfishing_risk,
            water_temperature_c: parse_float(
                raw.water_temperature_c,
                index,
                "Water_Temperature(C)",
            )?,
            water_pollution_level: raw.water_pollution_level,
        });
    }
    debug!(rows = rows.len(), "numeric columns coerced");
    Ok(WorkingCopy { rows })
}

fn parse_integer(cell: Option<String>, row: usize, column: &'static str) -> Result<Option<i64>> {
    let Some(value) = cell else {
        return Ok(None);
    };
    let scrubbed = value.trim().replace(',', "");
    if scrubbed.is_empty() {
        return Ok(None);
    }
    scrubbed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| PipelineError::TypeCoercion { row, column, value })
}

fn parse_float(cell: Option<String>, row: usize, column: &'static str) -> Result<Option<f64>> {
    let Some(value) = cell else {
        return Ok(None);
    };
    let scrubbed = value.trim().replace(',', "");
    if scrubbed.is_empty() {
        return Ok(None);
    }
    scrubbed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| PipelineError::TypeCoercion { row, column, value })
}
