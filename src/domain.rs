use serde::{Deserialize, Serialize};

/// The nine survey columns, in the exact order the source CSV carries them.
pub const EXPECTED_HEADERS: [&str; 9] = [
    "Species_Name",
    "Region",
    "Breeding_Season",
    "Fishing_Method",
    "Fish_Population",
    "Average_Size(cm)",
    "Overfishing_Risk",
    "Water_Temperature(C)",
    "Water_Pollution_Level",
];

/// One survey row exactly as it appears in the source file.
///
/// Every field is optional: an empty CSV cell deserializes to `None`. This
/// shape is the raw working copy that the normalizer trims and coerces; the
/// source file itself is never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "Species_Name")]
    pub species_name: Option<String>,

    #[serde(rename = "Region")]
    pub region: Option<String>,

    #[serde(rename = "Breeding_Season")]
    pub breeding_season: Option<String>,

    #[serde(rename = "Fishing_Method")]
    pub fishing_method: Option<String>,

    #[serde(rename = "Fish_Population")]
    pub fish_population: Option<String>,

    #[serde(rename = "Average_Size(cm)")]
    pub average_size_cm: Option<String>,

    #[serde(rename = "Overfishing_Risk")]
    pub overfishing_risk: Option<String>,

    #[serde(rename = "Water_Temperature(C)")]
    pub water_temperature_c: Option<String>,

    #[serde(rename = "Water_Pollution_Level")]
    pub water_pollution_level: Option<String>,
}

/// One species/region observation after type coercion.
///
/// `fish_population` is an integer count; the two measurement columns are
/// floating-point. Fields stay optional until the missing-value handler has
/// applied its defaults, and even then only `fish_population` and
/// `breeding_season` are guaranteed non-null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Species_Name")]
    pub species_name: Option<String>,

    #[serde(rename = "Region")]
    pub region: Option<String>,

    #[serde(rename = "Breeding_Season")]
    pub breeding_season: Option<String>,

    #[serde(rename = "Fishing_Method")]
    pub fishing_method: Option<String>,

    #[serde(rename = "Fish_Population")]
    pub fish_population: Option<i64>,

    #[serde(rename = "Average_Size(cm)")]
    pub average_size_cm: Option<f64>,

    #[serde(rename = "Overfishing_Risk")]
    pub overfishing_risk: Option<String>,

    #[serde(rename = "Water_Temperature(C)")]
    pub water_temperature_c: Option<f64>,

    #[serde(rename = "Water_Pollution_Level")]
    pub water_pollution_level: Option<String>,
}

impl Observation {
    /// The full nine-field business key used for duplicate detection.
    pub fn business_key(&self) -> BusinessKey {
        BusinessKey {
            species_name: self.species_name.clone(),
            region: self.region.clone(),
            breeding_season: self.breeding_season.clone(),
            fishing_method: self.fishing_method.clone(),
            fish_population: self.fish_population,
            average_size_bits: self.average_size_cm.map(f64::to_bits),
            overfishing_risk: self.overfishing_risk.clone(),
            water_temperature_bits: self.water_temperature_c.map(f64::to_bits),
            water_pollution_level: self.water_pollution_level.clone(),
        }
    }

    /// Names of the columns that are null in this row, in schema order.
    pub fn null_columns(&self) -> Vec<&'static str> {
        let mut cols = Vec::new();
        if self.species_name.is_none() {
            cols.push("Species_Name");
        }
        if self.region.is_none() {
            cols.push("Region");
        }
        if self.breeding_season.is_none() {
            cols.push("Breeding_Season");
        }
        if self.fishing_method.is_none() {
            cols.push("Fishing_Method");
        }
        if self.fish_population.is_none() {
            cols.push("Fish_Population");
        }
        if self.average_size_cm.is_none() {
            cols.push("Average_Size(cm)");
        }
        if self.overfishing_risk.is_none() {
            cols.push("Overfishing_Risk");
        }
        if self.water_temperature_c.is_none() {
            cols.push("Water_Temperature(C)");
        }
        if self.water_pollution_level.is_none() {
            cols.push("Water_Pollution_Level");
        }
        cols
    }
}

/// Grouping key for duplicate detection, null-safe across all nine fields.
///
/// Two nulls in the same column compare equal, matching standard grouping
/// semantics. Float columns are keyed by their bit pattern so the key can
/// be hashed; rows only group together on exact value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessKey {
    pub species_name: Option<String>,
    pub region: Option<String>,
    pub breeding_season: Option<String>,
    pub fishing_method: Option<String>,
    pub fish_population: Option<i64>,
    pub average_size_bits: Option<u64>,
    pub overfishing_risk: Option<String>,
    pub water_temperature_bits: Option<u64>,
    pub water_pollution_level: Option<String>,
}
