use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::runner::PipelineOutcome;
use crate::reports;

/// Machine-readable summary of one pipeline run, written alongside the
/// exported tables.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub source_path: String,
    pub source_rows: usize,
    pub cleaned_rows: usize,
    pub duplicate_groups: usize,
    pub nulls_before_remediation: usize,
    pub fish_population_filled: usize,
    pub breeding_season_filled: usize,
    pub range_violation_rows: usize,
    pub residual_null_rows: usize,
}

impl RunSummary {
    pub fn from_outcome(outcome: &PipelineOutcome) -> Self {
        Self {
            run_id: outcome.run_id,
            started_at: outcome.started_at,
            finished_at: outcome.finished_at,
            source_path: outcome.source_path.clone(),
            source_rows: outcome.source_rows,
            cleaned_rows: outcome.copy.len(),
            duplicate_groups: outcome.duplicates.len(),
            nulls_before_remediation: outcome.null_audit.total(),
            fish_population_filled: outcome.remediation.fish_population_filled,
            breeding_season_filled: outcome.remediation.breeding_season_filled,
            range_violation_rows: outcome.range_violations.len(),
            residual_null_rows: outcome.residual_nulls.len(),
        }
    }
}

/// Writes the cleaned copy, the five reports, and the run summary into the
/// output directory. Returns the paths written.
pub fn write_all(outcome: &PipelineOutcome, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    written.push(write_csv(
        output_dir.join("cleaned_observations.csv"),
        &outcome.copy.rows,
    )?);
    written.push(write_csv(
        output_dir.join("population_by_region.csv"),
        &reports::population_by_region(&outcome.copy),
    )?);
    written.push(write_csv(
        output_dir.join("overfishing_trend.csv"),
        &reports::overfishing_trend(&outcome.copy),
    )?);
    written.push(write_csv(
        output_dir.join("pollution_impact.csv"),
        &reports::pollution_impact(&outcome.copy),
    )?);
    written.push(write_csv(
        output_dir.join("breeding_season_frequency.csv"),
        &reports::breeding_season_frequency(&outcome.copy),
    )?);
    written.push(write_csv(
        output_dir.join("temperature_by_region.csv"),
        &reports::temperature_by_region(&outcome.copy),
    )?);
    written.push(write_summary(
        output_dir.join("run_summary.json"),
        &RunSummary::from_outcome(outcome),
    )?);

    info!(files = written.len(), dir = %output_dir.display(), "artifacts exported");
    Ok(written)
}

fn write_csv<T: Serialize>(path: PathBuf, rows: &[T]) -> Result<PathBuf> {
    let mut writer = WriterBuilder::new().from_path(&path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(path)
}

fn write_summary(path: PathBuf, summary: &RunSummary) -> Result<PathBuf> {
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(path)
}
