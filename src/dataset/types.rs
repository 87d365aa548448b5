//! Core data types for the launch dataset
//!
//! - `LaunchRecord`: one row of the launch table
//! - `Outcome`: the binary `class` column (1 = success, 0 = failure)

use serde::{Deserialize, Serialize};

/// Column header for the launch site
pub const COLUMN_LAUNCH_SITE: &str = "Launch Site";
/// Column header for the payload mass
pub const COLUMN_PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// Column header for the booster version category
pub const COLUMN_BOOSTER_CATEGORY: &str = "Booster Version Category";
/// Column header for the success flag
pub const COLUMN_CLASS: &str = "class";

/// Columns that must be present in the input file
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_LAUNCH_SITE,
    COLUMN_PAYLOAD_MASS,
    COLUMN_BOOSTER_CATEGORY,
    COLUMN_CLASS,
];

/// Launch outcome, stored as the raw `class` value on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Raw class value (0 or 1)
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Human-readable label used in chart legends
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// A single launch row
///
/// Field names map to the CSV headers; extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_outcome_serializes_as_class() {
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, "1");

        let parsed: Outcome = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Outcome::Failure);
        assert!(serde_json::from_str::<Outcome>("3").is_err());
    }

    #[test]
    fn test_outcome_label() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.to_string(), "0");
        assert!(Outcome::Success.is_success());
    }
}
