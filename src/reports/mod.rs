//! The five aggregate reports over the cleaned working copy.
//!
//! Each report is a pure function of the copy; none mutates data and none
//! depends on another report's output. Rows whose group column is null fall
//! into the `"(none)"` bucket so every observation is represented.

use std::collections::HashMap;

use serde::Serialize;

use crate::pipeline::normalize::WorkingCopy;

/// Bucket label for rows whose group column is null.
pub const NULL_BUCKET: &str = "(none)";

fn bucket(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NULL_BUCKET.to_string())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// R1: total and mean fish population per region, descending by total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPopulation {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Total_Population")]
    pub total_population: i64,
    #[serde(rename = "Average_Population")]
    pub average_population: f64,
}

pub fn population_by_region(copy: &WorkingCopy) -> Vec<RegionPopulation> {
    let mut groups: HashMap<String, (i64, usize)> = HashMap::new();
    for row in &copy.rows {
        let entry = groups.entry(bucket(&row.region)).or_default();
        entry.0 += row.fish_population.unwrap_or(0);
        entry.1 += 1;
    }

    let mut report: Vec<RegionPopulation> = groups
        .into_iter()
        .map(|(region, (total, count))| RegionPopulation {
            region,
            total_population: total,
            average_population: total as f64 / count as f64,
        })
        .collect();
    report.sort_by(|a, b| b.total_population.cmp(&a.total_population));
    report
}

/// R2: overfishing-risk share per region, descending by percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRiskTrend {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Total_Species")]
    pub total_species: usize,
    #[serde(rename = "At_Risk_Species")]
    pub at_risk_species: usize,
    /// Share of rows with `Overfishing_Risk = "YES"`, rounded to 2 decimals.
    #[serde(rename = "Overfishing_Percentage")]
    pub overfishing_percentage: f64,
}

pub fn overfishing_trend(copy: &WorkingCopy) -> Vec<RegionRiskTrend> {
    let mut groups: HashMap<String, (usize, usize)> = HashMap::new();
    for row in &copy.rows {
        let entry = groups.entry(bucket(&row.region)).or_default();
        entry.0 += 1;
        if row.overfishing_risk.as_deref() == Some("YES") {
            entry.1 += 1;
        }
    }

    let mut report: Vec<RegionRiskTrend> = groups
        .into_iter()
        .map(|(region, (total, at_risk))| RegionRiskTrend {
            region,
            total_species: total,
            at_risk_species: at_risk,
            overfishing_percentage: round2(at_risk as f64 / total as f64 * 100.0),
        })
        .collect();
    report.sort_by(|a, b| b.overfishing_percentage.total_cmp(&a.overfishing_percentage));
    report
}

/// R3: mean population and mean size per pollution level, descending by
/// mean population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutionImpact {
    #[serde(rename = "Water_Pollution_Level")]
    pub water_pollution_level: String,
    #[serde(rename = "Average_Population")]
    pub average_population: f64,
    /// Mean over rows where the size is present; empty if none are.
    #[serde(rename = "Average_Size(cm)")]
    pub average_size_cm: Option<f64>,
}

pub fn pollution_impact(copy: &WorkingCopy) -> Vec<PollutionImpact> {
    #[derive(Default)]
    struct Acc {
        population: i64,
        rows: usize,
        size_sum: f64,
        size_rows: usize,
    }

    let mut groups: HashMap<String, Acc> = HashMap::new();
    for row in &copy.rows {
        let acc = groups
            .entry(bucket(&row.water_pollution_level))
            .or_default();
        acc.population += row.fish_population.unwrap_or(0);
        acc.rows += 1;
        if let Some(size) = row.average_size_cm {
            acc.size_sum += size;
            acc.size_rows += 1;
        }
    }

    let mut report: Vec<PollutionImpact> = groups
        .into_iter()
        .map(|(level, acc)| PollutionImpact {
            water_pollution_level: level,
            average_population: acc.population as f64 / acc.rows as f64,
            average_size_cm: (acc.size_rows > 0).then(|| acc.size_sum / acc.size_rows as f64),
        })
        .collect();
    report.sort_by(|a, b| b.average_population.total_cmp(&a.average_population));
    report
}

/// R4: observation count per breeding season, descending by count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedingSeasonFrequency {
    #[serde(rename = "Breeding_Season")]
    pub breeding_season: String,
    #[serde(rename = "Observation_Count")]
    pub observation_count: usize,
}

pub fn breeding_season_frequency(copy: &WorkingCopy) -> Vec<BreedingSeasonFrequency> {
    let mut groups: HashMap<String, usize> = HashMap::new();
    for row in &copy.rows {
        *groups.entry(bucket(&row.breeding_season)).or_default() += 1;
    }

    let mut report: Vec<BreedingSeasonFrequency> = groups
        .into_iter()
        .map(|(season, count)| BreedingSeasonFrequency {
            breeding_season: season,
            observation_count: count,
        })
        .collect();
    report.sort_by(|a, b| b.observation_count.cmp(&a.observation_count));
    report
}

/// R5: mean population and mean water temperature per region, descending by
/// mean temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTemperature {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Average_Population")]
    pub average_population: f64,
    /// Mean over rows where the temperature is present; empty if none are.
    #[serde(rename = "Average_Temperature(C)")]
    pub average_temperature_c: Option<f64>,
}

pub fn temperature_by_region(copy: &WorkingCopy) -> Vec<RegionTemperature> {
    #[derive(Default)]
    struct Acc {
        population: i64,
        rows: usize,
        temperature_sum: f64,
        temperature_rows: usize,
    }

    let mut groups: HashMap<String, Acc> = HashMap::new();
    for row in &copy.rows {
        let acc = groups.entry(bucket(&row.region)).or_default();
        acc.population += row.fish_population.unwrap_or(0);
        acc.rows += 1;
        if let Some(temperature) = row.water_temperature_c {
            acc.temperature_sum += temperature;
            acc.temperature_rows += 1;
        }
    }

    let mut report: Vec<RegionTemperature> = groups
        .into_iter()
        .map(|(region, acc)| RegionTemperature {
            region,
            average_population: acc.population as f64 / acc.rows as f64,
            average_temperature_c: (acc.temperature_rows > 0)
                .then(|| acc.temperature_sum / acc.temperature_rows as f64),
        })
        .collect();
    // Regions with no recorded temperature sort last.
    report.sort_by(|a, b| {
        b.average_temperature_c
            .partial_cmp(&a.average_temperature_c)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn row(region: &str, population: i64) -> Observation {
        Observation {
            species_name: Some("Herring".to_string()),
            region: Some(region.to_string()),
            breeding_season: Some("Spring".to_string()),
            fishing_method: Some("Trawling".to_string()),
            fish_population: Some(population),
            average_size_cm: Some(30.0),
            overfishing_risk: Some("NO".to_string()),
            water_temperature_c: Some(10.0),
            water_pollution_level: Some("low".to_string()),
        }
    }

    #[test]
    fn round2_keeps_two_decimal_places() {
        assert_eq!(round2(1.0 / 3.0 * 100.0), 33.33);
        assert_eq!(round2(25.0), 25.0);
    }

    #[test]
    fn null_group_keys_fall_into_the_none_bucket() {
        let mut anonymous = row("ignored", 10);
        anonymous.region = None;
        let copy = WorkingCopy {
            rows: vec![anonymous],
        };
        let report = population_by_region(&copy);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].region, NULL_BUCKET);
    }
}
