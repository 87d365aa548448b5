//! Dashboard Layout
//!
//! Describes the page controls: the heading, the site dropdown options and
//! the payload range slider with its initial selection.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::projection::{PayloadRange, SiteSelector, ALL_SITES};

/// Label of the dropdown option that selects every site
pub const ALL_SITES_LABEL: &str = "All Sites";

/// One option of the site dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection: the observed payload bounds of the dataset
    pub value: PayloadRange,
}

/// Everything the page needs to render its controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub default_site: SiteSelector,
    pub payload_slider: PayloadSlider,
}

impl DashboardLayout {
    pub fn build(dataset: &Dataset, sites: &[String], config: &DashboardConfig) -> Self {
        let site_options = std::iter::once(SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(sites.iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }))
        .collect();

        Self {
            title: config.title.clone(),
            site_options,
            default_site: SiteSelector::All,
            payload_slider: PayloadSlider {
                min: config.payload_min,
                max: config.payload_max,
                step: config.payload_step,
                value: default_payload_range(dataset, config),
            },
        }
    }
}

/// Initial slider selection: observed payload bounds, or the full slider
/// domain when the dataset is empty
pub fn default_payload_range(dataset: &Dataset, config: &DashboardConfig) -> PayloadRange {
    match dataset.payload_bounds() {
        Some((low, high)) => PayloadRange::new(low, high),
        None => PayloadRange::new(config.payload_min, config.payload_max),
    }
}
