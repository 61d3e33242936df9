use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::domain::{RawObservation, EXPECTED_HEADERS};
use crate::error::{PipelineError, Result};

/// The untyped working copy: a complete, unmodified copy of the source rows.
///
/// The loader either copies every row or returns an error; no partial copy
/// survives a failure. The source file is opened read-only and never written.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub rows: Vec<RawObservation>,
}

/// Reads the source CSV into a working copy after verifying the schema.
pub fn load(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    verify_schema(reader.headers()?)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    info!(rows = rows.len(), source = %path.display(), "working copy loaded");
    Ok(RawTable { rows })
}

/// Checks that the header row carries exactly the nine expected columns,
/// by name and position.
fn verify_schema(headers: &csv::StringRecord) -> Result<()> {
    for (position, expected) in EXPECTED_HEADERS.iter().enumerate() {
        match headers.get(position) {
            Some(found) if found == *expected => {}
            other => {
                return Err(PipelineError::SchemaMismatch {
                    position,
                    expected: (*expected).to_string(),
                    found: other.map(str::to_string),
                })
            }
        }
    }
    if headers.len() > EXPECTED_HEADERS.len() {
        return Err(PipelineError::SchemaMismatch {
            position: EXPECTED_HEADERS.len(),
            expected: "<end of columns>".to_string(),
            found: headers.get(EXPECTED_HEADERS.len()).map(str::to_string),
        });
    }
    Ok(())
}
