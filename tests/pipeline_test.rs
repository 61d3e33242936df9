use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::tempdir;

use fishdata_cleaner::error::PipelineError;
use fishdata_cleaner::export;
use fishdata_cleaner::pipeline::runner;

const HEADER: &str = "Species_Name,Region,Breeding_Season,Fishing_Method,Fish_Population,Average_Size(cm),Overfishing_Risk,Water_Temperature(C),Water_Pollution_Level";

fn write_dataset(dir: &tempfile::TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("survey.csv");
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_run_cleans_and_reports_diagnostics() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &[
            // Whitespace to trim, integer-literal size to coerce.
            "  Atlantic Cod ,North Sea, Spring ,Trawling,120000,88,YES,9.4,Medium",
            // Exact duplicate pair.
            "Haddock,North Sea,Winter,Gillnet,4500,55.0,NO,7.2,low",
            "Haddock,North Sea,Winter,Gillnet,4500,55.0,NO,7.2,low",
            // Missing population and breeding season (the two default rules).
            "Anchovy,Mediterranean,,Purse seine,,12.0,NO,19.0,medium",
            // Negative population and temperature, missing region.
            "Mackerel,,Spring,Trawling,-5,35.0,NO,-2.0,low",
        ],
    );

    let outcome = runner::run(&input)?;

    assert_eq!(outcome.source_rows, 5);
    assert_eq!(outcome.copy.len(), 5);

    // Trim applied and size coerced to float.
    let cod = &outcome.copy.rows[0];
    assert_eq!(cod.species_name.as_deref(), Some("Atlantic Cod"));
    assert_eq!(cod.breeding_season.as_deref(), Some("Spring"));
    assert_eq!(cod.average_size_cm, Some(88.0));

    // One duplicate group of two.
    assert_eq!(outcome.duplicates.len(), 1);
    assert_eq!(outcome.duplicates[0].duplicate_count, 2);

    // Null audit saw the gaps before remediation.
    assert_eq!(outcome.null_audit.fish_population, 1);
    assert_eq!(outcome.null_audit.breeding_season, 1);
    assert_eq!(outcome.null_audit.region, 1);

    // Exactly the two default rules fired.
    assert_eq!(outcome.remediation.fish_population_filled, 1);
    assert_eq!(outcome.remediation.breeding_season_filled, 1);

    // The negative row is flagged on both columns but stays in the copy.
    assert_eq!(outcome.range_violations.len(), 1);
    assert_eq!(
        outcome.range_violations[0].columns,
        vec!["Fish_Population", "Water_Temperature(C)"]
    );

    // The missing region survives remediation and shows up in the final check.
    assert_eq!(outcome.residual_nulls.len(), 1);
    assert_eq!(outcome.residual_nulls[0].null_columns, vec!["Region"]);

    Ok(())
}

#[test]
fn default_fill_is_complete() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &[
            "Anchovy,Mediterranean,,Purse seine,,12.0,NO,19.0,medium",
            "Sardine,Mediterranean,,Purse seine,,18.0,NO,19.0,medium",
        ],
    );

    let outcome = runner::run(&input)?;
    for row in &outcome.copy.rows {
        assert!(row.fish_population.is_some());
        assert_eq!(row.fish_population, Some(0));
        assert_eq!(row.breeding_season.as_deref(), Some("UNKNOWN"));
    }
    Ok(())
}

#[test]
fn source_file_is_never_modified() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &[
            "  Atlantic Cod ,North Sea, Spring ,Trawling,120000,88,YES,9.4,Medium",
            "Mackerel,Atlantic,Spring,Trawling,-5,35.0,NO,11.0,low",
        ],
    );
    let before = fs::read(&input)?;

    let outcome = runner::run(&input)?;
    let output_dir = dir.path().join("output");
    export::write_all(&outcome, &output_dir)?;

    let after = fs::read(&input)?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn range_validation_is_advisory_only() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &[
            "Herring,Baltic Sea,Spring,Trawling,8000,25.0,NO,8.0,low",
            "Mackerel,Atlantic,Spring,Trawling,-5,35.0,NO,11.0,low",
        ],
    );

    let outcome = runner::run(&input)?;

    // The offending row is reported but never removed.
    assert_eq!(outcome.copy.len(), 2);
    assert_eq!(outcome.range_violations.len(), 1);
    assert_eq!(
        outcome.range_violations[0].row.fish_population,
        Some(-5)
    );
    assert!(outcome
        .copy
        .rows
        .iter()
        .any(|row| row.fish_population == Some(-5)));
    Ok(())
}

#[test]
fn missing_source_is_fatal() {
    let err = runner::run(&PathBuf::from("no/such/survey.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
}

#[test]
fn schema_mismatch_aborts_the_load() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("survey.csv");
    fs::write(
        &path,
        "Species,Region,Breeding_Season,Fishing_Method,Fish_Population,Average_Size(cm),Overfishing_Risk,Water_Temperature(C),Water_Pollution_Level\n",
    )?;

    let err = runner::run(&path).unwrap_err();
    match err {
        PipelineError::SchemaMismatch { position, .. } => assert_eq!(position, 0),
        other => panic!("expected schema mismatch, got {other:?}"),
    }
    Ok(())
}

#[test]
fn non_numeric_cells_abort_coercion() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &["Herring,Baltic Sea,Spring,Trawling,many,25.0,NO,8.0,low"],
    );

    let err = runner::run(&input).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::TypeCoercion {
            column: "Fish_Population",
            ..
        }
    ));
    Ok(())
}

#[test]
fn export_writes_cleaned_copy_reports_and_summary() -> Result<()> {
    let dir = tempdir()?;
    let input = write_dataset(
        &dir,
        &["Herring,Baltic Sea,Spring,Trawling,8000,25.0,NO,8.0,low"],
    );

    let outcome = runner::run(&input)?;
    let output_dir = dir.path().join("output");
    let written = export::write_all(&outcome, &output_dir)?;
    assert_eq!(written.len(), 7);

    let cleaned = fs::read_to_string(output_dir.join("cleaned_observations.csv"))?;
    assert!(cleaned.starts_with(
        "Species_Name,Region,Breeding_Season,Fishing_Method,Fish_Population,Average_Size(cm),Overfishing_Risk,Water_Temperature(C),Water_Pollution_Level"
    ));
    assert!(cleaned.contains("Herring"));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("run_summary.json"))?)?;
    assert_eq!(summary["source_rows"], 1);
    assert_eq!(summary["cleaned_rows"], 1);
    assert_eq!(summary["duplicate_groups"], 0);
    Ok(())
}
