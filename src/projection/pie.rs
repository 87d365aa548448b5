//! Pie-Chart Projection
//!
//! With every site selected the pie shows successful launches per site;
//! with a single site it shows that site's success/failure split.

use serde::Serialize;
use std::collections::HashMap;

use super::selector::SiteSelector;
use crate::dataset::{Dataset, Outcome};

/// Successful launches at one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSuccesses {
    pub site: String,
    pub successes: u64,
}

/// Number of launches with one outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: u64,
}

/// Aggregates backing the pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PieChartInput {
    /// Sum of `class` per site, one entry for every site in the dataset
    SuccessesBySite { entries: Vec<SiteSuccesses> },
    /// Value counts of `class` for one site; only observed outcomes appear
    OutcomeCounts {
        site: String,
        entries: Vec<OutcomeCount>,
    },
}

impl PieChartInput {
    pub fn len(&self) -> usize {
        match self {
            PieChartInput::SuccessesBySite { entries } => entries.len(),
            PieChartInput::OutcomeCounts { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all slice values
    pub fn total(&self) -> u64 {
        match self {
            PieChartInput::SuccessesBySite { entries } => {
                entries.iter().map(|e| e.successes).sum()
            }
            PieChartInput::OutcomeCounts { entries, .. } => entries.iter().map(|e| e.count).sum(),
        }
    }
}

/// Compute the pie chart aggregates for the current site selection
///
/// `ALL` sums the success flag per site in first-occurrence order, keeping
/// sites with zero successes. A specific site counts each observed outcome,
/// largest count first with ties kept in first-occurrence order. A site with
/// no records yields an empty result.
pub fn compute_pie_data(dataset: &Dataset, selector: &SiteSelector) -> PieChartInput {
    match selector {
        SiteSelector::All => PieChartInput::SuccessesBySite {
            entries: successes_by_site(dataset),
        },
        SiteSelector::Site(site) => PieChartInput::OutcomeCounts {
            site: site.clone(),
            entries: outcome_counts(dataset, site),
        },
    }
}

fn successes_by_site(dataset: &Dataset) -> Vec<SiteSuccesses> {
    let mut entries: Vec<SiteSuccesses> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in dataset.records() {
        let idx = *positions
            .entry(record.launch_site.as_str())
            .or_insert_with(|| {
                entries.push(SiteSuccesses {
                    site: record.launch_site.clone(),
                    successes: 0,
                });
                entries.len() - 1
            });
        entries[idx].successes += u64::from(record.outcome.class());
    }

    entries
}

fn outcome_counts(dataset: &Dataset, site: &str) -> Vec<OutcomeCount> {
    let mut entries: Vec<OutcomeCount> = Vec::new();

    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        match entries.iter_mut().find(|e| e.outcome == record.outcome) {
            Some(entry) => entry.count += 1,
            None => entries.push(OutcomeCount {
                outcome: record.outcome,
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
