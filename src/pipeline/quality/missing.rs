use serde::Serialize;
use tracing::debug;

use crate::pipeline::normalize::WorkingCopy;

/// Default applied to a null `Fish_Population`.
pub const DEFAULT_FISH_POPULATION: i64 = 0;
/// Default applied to a null `Breeding_Season`.
pub const DEFAULT_BREEDING_SEASON: &str = "UNKNOWN";

/// Null counts per column, one entry for each of the nine survey columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NullAudit {
    pub species_name: usize,
    pub region: usize,
    pub breeding_season: usize,
    pub fishing_method: usize,
    pub fish_population: usize,
    pub average_size_cm: usize,
    pub overfishing_risk: usize,
    pub water_temperature_c: usize,
    pub water_pollution_level: usize,
}

impl NullAudit {
    /// Total nulls across all columns.
    pub fn total(&self) -> usize {
        self.species_name
            + self.region
            + self.breeding_season
            + self.fishing_method
            + self.fish_population
            + self.average_size_cm
            + self.overfishing_risk
            + self.water_temperature_c
            + self.water_pollution_level
    }

    /// Column name / count pairs in schema order, for display and export.
    pub fn by_column(&self) -> [(&'static str, usize); 9] {
        [
            ("Species_Name", self.species_name),
            ("Region", self.region),
            ("Breeding_Season", self.breeding_season),
            ("Fishing_Method", self.fishing_method),
            ("Fish_Population", self.fish_population),
            ("Average_Size(cm)", self.average_size_cm),
            ("Overfishing_Risk", self.overfishing_risk),
            ("Water_Temperature(C)", self.water_temperature_c),
            ("Water_Pollution_Level", self.water_pollution_level),
        ]
    }
}

/// Counts nulls in every column of the working copy.
pub fn audit_nulls(copy: &WorkingCopy) -> NullAudit {
    let mut audit = NullAudit::default();
    for row in &copy.rows {
        audit.species_name += row.species_name.is_none() as usize;
        audit.region += row.region.is_none() as usize;
        audit.breeding_season += row.breeding_season.is_none() as usize;
        audit.fishing_method += row.fishing_method.is_none() as usize;
        audit.fish_population += row.fish_population.is_none() as usize;
        audit.average_size_cm += row.average_size_cm.is_none() as usize;
        audit.overfishing_risk += row.overfishing_risk.is_none() as usize;
        audit.water_temperature_c += row.water_temperature_c.is_none() as usize;
        audit.water_pollution_level += row.water_pollution_level.is_none() as usize;
    }
    audit
}

/// How many substitutions each default rule applied.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RemediationCounts {
    pub fish_population_filled: usize,
    pub breeding_season_filled: usize,
}

/// Applies the two default-substitution rules in place.
///
/// Exactly two rules exist: null `Fish_Population` becomes `0` and null
/// `Breeding_Season` becomes `"UNKNOWN"`. No other column is defaulted;
/// residual nulls are surfaced by the final integrity check instead.
pub fn fill_defaults(copy: &mut WorkingCopy) -> RemediationCounts {
    let mut counts = RemediationCounts::default();
    for row in &mut copy.rows {
        if row.fish_population.is_none() {
            row.fish_population = Some(DEFAULT_FISH_POPULATION);
            counts.fish_population_filled += 1;
        }
        if row.breeding_season.is_none() {
            row.breeding_season = Some(DEFAULT_BREEDING_SEASON.to_string());
            counts.breeding_season_filled += 1;
        }
    }
    debug!(
        population = counts.fish_population_filled,
        season = counts.breeding_season_filled,
        "default substitution applied"
    );
    counts
}
