//! Launch Dataset
//!
//! The immutable in-memory launch table and the site catalog derived from it.
//!
//! The dataset is loaded once at startup and never mutated afterwards, so it
//! can be shared across request handlers behind an `Arc` without locking.

mod catalog;
mod error;
mod loader;
mod types;

pub use catalog::distinct_sites;
pub use error::{DatasetError, DatasetResult};
pub use types::{
    LaunchRecord, Outcome, COLUMN_BOOSTER_CATEGORY, COLUMN_CLASS, COLUMN_LAUNCH_SITE,
    COLUMN_PAYLOAD_MASS, REQUIRED_COLUMNS,
};

/// Ordered, read-only table of launch records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// All records in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-occurrence order
    pub fn sites(&self) -> Vec<String> {
        distinct_sites(self)
    }

    /// Smallest and largest payload mass observed, `None` for an empty table
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        Some(masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m))))
    }

    /// Number of successful launches
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 9000.0, "B4", Outcome::Failure),
            LaunchRecord::new("B", 2000.0, "FT", Outcome::Success),
        ])
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(sample().payload_bounds(), Some((500.0, 9000.0)));
        assert_eq!(Dataset::default().payload_bounds(), None);
    }

    #[test]
    fn test_success_count() {
        assert_eq!(sample().success_count(), 2);
        assert_eq!(Dataset::default().success_count(), 0);
    }

    #[test]
    fn test_len() {
        let dataset = sample();
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }
}
