//! Scatter Projection
//!
//! Payload mass against launch outcome, colored by booster version category.

use serde::Serialize;

use super::selector::{PayloadRange, SiteSelector};
use crate::dataset::{Dataset, Outcome};

/// One point of the payload/outcome scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Points backing the scatter chart, in dataset order
pub type ScatterChartInput = Vec<ScatterPoint>;

/// Compute the scatter chart points for the current range and site selection
///
/// Keeps records whose payload lies in `range` (inclusive) and whose site
/// passes `selector`, preserving their relative order. An inverted range
/// selects nothing.
pub fn compute_scatter_data(
    dataset: &Dataset,
    range: PayloadRange,
    selector: &SiteSelector,
) -> ScatterChartInput {
    if range.is_inverted() {
        return Vec::new();
    }

    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selector.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect()
}
