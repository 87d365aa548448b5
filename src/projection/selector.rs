//! Selection inputs driven by the dashboard controls.

use serde::{Deserialize, Serialize};

/// Sentinel value of the site dropdown that selects every site
pub const ALL_SITES: &str = "ALL";

/// Current value of the site dropdown
///
/// Any value other than [`ALL_SITES`] is a literal site name matched exactly
/// (case-sensitive). A name that matches no record selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn site(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// Check whether a record's site passes this selector
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => site == launch_site,
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> Self {
        match selector {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelector::All => write!(f, "{}", ALL_SITES),
            SiteSelector::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Inclusive payload mass interval selected on the range slider
///
/// Not validated: an inverted range (`low > high`) contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Check if a payload mass falls within the range (both ends inclusive)
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}
