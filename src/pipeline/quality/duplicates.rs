use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{BusinessKey, Observation};
use crate::pipeline::normalize::WorkingCopy;

/// A set of rows sharing the full nine-field business key.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// The first row encountered with this key.
    pub representative: Observation,
    #[serde(rename = "Duplicate_Count")]
    pub duplicate_count: usize,
}

/// Partitions the working copy by business key and reports every partition
/// with more than one member.
///
/// Grouping is null-safe: two nulls in the same column are equal. The
/// report order is unspecified. Read-only; duplicate rows are never merged
/// or deleted here.
pub fn find_duplicates(copy: &WorkingCopy) -> Vec<DuplicateGroup> {
    let mut groups: HashMap<BusinessKey, (usize, usize)> = HashMap::new();
    for (index, row) in copy.rows.iter().enumerate() {
        let entry = groups.entry(row.business_key()).or_insert((index, 0));
        entry.1 += 1;
    }

    groups
        .into_values()
        .filter(|(_, count)| *count > 1)
        .map(|(first_index, count)| DuplicateGroup {
            representative: copy.rows[first_index].clone(),
            duplicate_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(region: &str) -> Observation {
        Observation {
            species_name: Some("Haddock".to_string()),
            region: Some(region.to_string()),
            breeding_season: Some("Winter".to_string()),
            fishing_method: Some("Gillnet".to_string()),
            fish_population: Some(4_500),
            average_size_cm: Some(55.0),
            overfishing_risk: Some("NO".to_string()),
            water_temperature_c: Some(7.2),
            water_pollution_level: Some("low".to_string()),
        }
    }

    #[test]
    fn identical_rows_group_with_their_count() {
        let copy = WorkingCopy {
            rows: vec![observation("North Sea"), observation("North Sea")],
        };
        let report = find_duplicates(&copy);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].duplicate_count, 2);
        assert_eq!(report[0].representative.region.as_deref(), Some("North Sea"));
    }

    #[test]
    fn a_single_differing_field_excludes_rows_from_a_group() {
        let copy = WorkingCopy {
            rows: vec![observation("North Sea"), observation("Baltic Sea")],
        };
        assert!(find_duplicates(&copy).is_empty());
    }

    #[test]
    fn rows_with_matching_nulls_still_group() {
        let mut a = observation("North Sea");
        let mut b = observation("North Sea");
        a.water_temperature_c = None;
        b.water_temperature_c = None;
        let copy = WorkingCopy { rows: vec![a, b] };
        assert_eq!(find_duplicates(&copy).len(), 1);
    }

    #[test]
    fn detection_never_mutates_the_copy() {
        let copy = WorkingCopy {
            rows: vec![observation("North Sea"), observation("North Sea")],
        };
        let before = copy.rows.clone();
        let _ = find_duplicates(&copy);
        assert_eq!(copy.rows, before);
    }
}
