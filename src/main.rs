use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use fishdata_cleaner::pipeline::runner::{self, PipelineOutcome};
use fishdata_cleaner::pipeline::WorkingCopy;
use fishdata_cleaner::{export, logging, reports};

#[derive(Parser)]
#[command(name = "fishdata_cleaner")]
#[command(about = "Cleaning and reporting pipeline for marine fish species survey data")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and export the cleaned copy plus reports
    Run {
        /// Path to the source survey CSV
        #[arg(long)]
        input: PathBuf,
        /// Directory for the cleaned copy, reports and run summary
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },
    /// Run the cleaning and diagnostics only, without exporting anything
    Check {
        /// Path to the source survey CSV
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { input, output_dir } => {
            let outcome = run_pipeline(&input)?;
            print_diagnostics(&outcome);
            print_reports(&outcome.copy);
            let written = export::write_all(&outcome, &output_dir)?;
            println!("\n📦 Wrote {} artifacts to {}", written.len(), output_dir.display());
        }
        Commands::Check { input } => {
            let outcome = run_pipeline(&input)?;
            print_diagnostics(&outcome);
        }
    }
    Ok(())
}

fn run_pipeline(input: &PathBuf) -> anyhow::Result<PipelineOutcome> {
    match runner::run(input) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(e.into())
        }
    }
}

fn print_diagnostics(outcome: &PipelineOutcome) {
    println!("\n📊 Cleaning results for {}:", outcome.source_path);
    println!("   Rows loaded: {}", outcome.source_rows);
    println!("   Rows in cleaned copy: {}", outcome.copy.len());
    println!(
        "   Defaults applied: {} population, {} breeding season",
        outcome.remediation.fish_population_filled, outcome.remediation.breeding_season_filled
    );

    println!("\n🔎 Missing values before remediation:");
    for (column, count) in outcome.null_audit.by_column() {
        println!("   {column:<24} {count:>6}");
    }

    if outcome.duplicates.is_empty() {
        println!("\n✅ No duplicate observations");
    } else {
        println!("\n⚠️  Duplicate observations ({} groups):", outcome.duplicates.len());
        for group in &outcome.duplicates {
            println!(
                "   {} / {} x{}",
                group.representative.species_name.as_deref().unwrap_or("(none)"),
                group.representative.region.as_deref().unwrap_or("(none)"),
                group.duplicate_count
            );
        }
    }

    if outcome.range_violations.is_empty() {
        println!("✅ No negative values");
    } else {
        println!("⚠️  Rows with negative values ({}):", outcome.range_violations.len());
        for violation in &outcome.range_violations {
            println!("   row {}: {}", violation.row_index, violation.columns.join(", "));
        }
    }

    if outcome.residual_nulls.is_empty() {
        println!("✅ Final integrity check passed");
    } else {
        println!("⚠️  Rows with residual nulls ({}):", outcome.residual_nulls.len());
        for finding in &outcome.residual_nulls {
            println!("   row {}: {}", finding.row_index, finding.null_columns.join(", "));
        }
    }
}

fn print_reports(copy: &WorkingCopy) {
    println!("\n🐟 Population by region");
    println!("{:<24} {:>16} {:>16}", "Region", "Total", "Average");
    println!("{}", "-".repeat(58));
    for row in reports::population_by_region(copy) {
        println!(
            "{:<24} {:>16} {:>16.1}",
            row.region, row.total_population, row.average_population
        );
    }

    println!("\n🎣 Overfishing risk by region");
    println!(
        "{:<24} {:>10} {:>10} {:>10}",
        "Region", "Total", "At risk", "Percent"
    );
    println!("{}", "-".repeat(58));
    for row in reports::overfishing_trend(copy) {
        println!(
            "{:<24} {:>10} {:>10} {:>10.2}",
            row.region, row.total_species, row.at_risk_species, row.overfishing_percentage
        );
    }

    println!("\n🏭 Pollution level vs population");
    println!("{:<24} {:>16} {:>16}", "Pollution", "Avg population", "Avg size (cm)");
    println!("{}", "-".repeat(58));
    for row in reports::pollution_impact(copy) {
        println!(
            "{:<24} {:>16.1} {:>16}",
            row.water_pollution_level,
            row.average_population,
            row.average_size_cm
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    println!("\n🐣 Breeding season frequency");
    println!("{:<24} {:>16}", "Season", "Observations");
    println!("{}", "-".repeat(42));
    for row in reports::breeding_season_frequency(copy) {
        println!("{:<24} {:>16}", row.breeding_season, row.observation_count);
    }

    println!("\n🌡️  Temperature vs population by region");
    println!("{:<24} {:>16} {:>16}", "Region", "Avg population", "Avg temp (C)");
    println!("{}", "-".repeat(58));
    for row in reports::temperature_by_region(copy) {
        println!(
            "{:<24} {:>16.1} {:>16}",
            row.region,
            row.average_population,
            row.average_temperature_c
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string())
        );
    }
}
