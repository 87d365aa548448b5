//! Data Transfer Objects
//!
//! Query parameters and response types for the API endpoints that are not
//! chart specifications themselves.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::projection::SiteSelector;

/// Query parameters for the pie chart
#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    /// Site dropdown value, defaults to ALL
    #[serde(default)]
    pub site: SiteSelector,
}

/// Query parameters for the scatter chart
#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    /// Site dropdown value, defaults to ALL
    #[serde(default)]
    pub site: SiteSelector,
    /// Lower payload bound (kg), defaults to the smallest observed payload
    #[serde(default, deserialize_with = "blank_as_none")]
    pub low: Option<f64>,
    /// Upper payload bound (kg), defaults to the largest observed payload
    #[serde(default, deserialize_with = "blank_as_none")]
    pub high: Option<f64>,
}

/// A cleared number input arrives as `low=`; treat it like an absent bound
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid payload bound: {:?}", value))),
    }
}

/// Site catalog response
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of successful launches
    pub successes: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn scatter_params(uri: &str) -> Result<ScatterParams, String> {
        let uri: Uri = uri.parse().unwrap();
        Query::<ScatterParams>::try_from_uri(&uri)
            .map(|Query(params)| params)
            .map_err(|e| e.body_text())
    }

    #[test]
    fn test_blank_bounds_are_absent() {
        let params = scatter_params("/scatter?site=A&low=&high=%20").unwrap();
        assert_eq!(params.site, SiteSelector::site("A"));
        assert_eq!(params.low, None);
        assert_eq!(params.high, None);
    }

    #[test]
    fn test_numeric_bounds() {
        let params = scatter_params("/scatter?low=1000&high=9600.5").unwrap();
        assert_eq!(params.site, SiteSelector::All);
        assert_eq!(params.low, Some(1000.0));
        assert_eq!(params.high, Some(9600.5));
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = scatter_params("/scatter?low=heavy").unwrap_err();
        assert!(err.contains("invalid payload bound"));
    }
}
