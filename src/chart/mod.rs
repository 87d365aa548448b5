//! Chart Specifications
//!
//! Rendering-ready descriptions of the two dashboard charts. The page script
//! hands these to the plotting library as-is, so titles, labels and series
//! grouping are decided here rather than in the browser.

use serde::Serialize;

use crate::dataset::{COLUMN_CLASS, COLUMN_PAYLOAD_MASS};
use crate::projection::{PayloadRange, PieChartInput, ScatterPoint, SiteSelector};

/// Title of the pie chart when every site is selected
pub const PIE_TITLE_ALL: &str = "Total successful launches by site";

/// One slice of the pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Legend label
    pub label: String,
    /// Category key: the site name, or the raw class value for a single site
    pub key: String,
    pub value: u64,
}

/// Pie chart specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub site: SiteSelector,
    pub slices: Vec<PieSlice>,
    pub total: u64,
}

impl PieChart {
    pub fn build(input: &PieChartInput) -> Self {
        match input {
            PieChartInput::SuccessesBySite { entries } => Self {
                title: PIE_TITLE_ALL.to_string(),
                site: SiteSelector::All,
                slices: entries
                    .iter()
                    .map(|e| PieSlice {
                        label: e.site.clone(),
                        key: e.site.clone(),
                        value: e.successes,
                    })
                    .collect(),
                total: input.total(),
            },
            PieChartInput::OutcomeCounts { site, entries } => Self {
                title: format!("Launch outcomes for site {}", site),
                site: SiteSelector::site(site.clone()),
                slices: entries
                    .iter()
                    .map(|e| PieSlice {
                        label: e.outcome.label().to_string(),
                        key: e.outcome.to_string(),
                        value: e.count,
                    })
                    .collect(),
                total: input.total(),
            },
        }
    }
}

/// Points of one booster version category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    /// `[payload_mass_kg, class]` pairs in dataset order
    pub points: Vec<[f64; 2]>,
}

/// Scatter chart specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub site: SiteSelector,
    pub range: PayloadRange,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
    pub point_count: usize,
}

impl ScatterChart {
    /// Group points into one series per booster category, in first-occurrence order
    pub fn build(points: &[ScatterPoint], selector: &SiteSelector, range: PayloadRange) -> Self {
        let mut series: Vec<ScatterSeries> = Vec::new();

        for point in points {
            let xy = [point.payload_mass_kg, f64::from(point.outcome.class())];
            match series
                .iter_mut()
                .find(|s| s.category == point.booster_version_category)
            {
                Some(existing) => existing.points.push(xy),
                None => series.push(ScatterSeries {
                    category: point.booster_version_category.clone(),
                    points: vec![xy],
                }),
            }
        }

        let title = match selector {
            SiteSelector::All => "Payload vs. launch outcome for all sites".to_string(),
            SiteSelector::Site(site) => format!("Payload vs. launch outcome for site {}", site),
        };

        Self {
            title,
            site: selector.clone(),
            range,
            x_label: COLUMN_PAYLOAD_MASS.to_string(),
            y_label: COLUMN_CLASS.to_string(),
            series,
            point_count: points.len(),
        }
    }
}
