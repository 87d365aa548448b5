//! Chart Projections
//!
//! Pure functions that turn the dataset and the current control values into
//! chart-ready data. Every call recomputes from scratch; nothing is cached.

mod pie;
mod scatter;
mod selector;

pub use pie::{compute_pie_data, OutcomeCount, PieChartInput, SiteSuccesses};
pub use scatter::{compute_scatter_data, ScatterChartInput, ScatterPoint};
pub use selector::{PayloadRange, SiteSelector, ALL_SITES};
