//! Site Catalog
//!
//! Distinct launch sites used to populate the site dropdown.

use std::collections::HashSet;

use super::Dataset;

/// Distinct `launch_site` values in first-occurrence order
///
/// The order is stable across calls so the dropdown options render the same
/// way every time.
pub fn distinct_sites(dataset: &Dataset) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    dataset
        .records()
        .iter()
        .filter(|r| seen.insert(r.launch_site.as_str()))
        .map(|r| r.launch_site.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn record(site: &str) -> LaunchRecord {
        LaunchRecord::new(site, 1000.0, "FT", Outcome::Success)
    }

    #[test]
    fn test_first_occurrence_order() {
        let dataset = Dataset::from_records(vec![
            record("CCAFS LC-40"),
            record("VAFB SLC-4E"),
            record("CCAFS LC-40"),
            record("KSC LC-39A"),
            record("VAFB SLC-4E"),
        ]);

        assert_eq!(
            distinct_sites(&dataset),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn test_no_duplicates_and_all_present() {
        let dataset = Dataset::from_records(vec![
            record("b"),
            record("a"),
            record("b"),
            record("B"),
        ]);

        let sites = distinct_sites(&dataset);
        let unique: HashSet<&String> = sites.iter().collect();
        assert_eq!(unique.len(), sites.len());
        for site in &sites {
            assert!(dataset.records().iter().any(|r| &r.launch_site == site));
        }
        // Matching is case-sensitive
        assert_eq!(sites, vec!["b", "a", "B"]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(distinct_sites(&Dataset::default()).is_empty());
    }
}
