//! # Launch Dash
//!
//! Interactive launch records dashboard: a pie chart of launch successes and
//! a payload/outcome scatter chart, both driven by a site dropdown and a
//! payload range slider.
//!
//! ## Modules
//!
//! - [`dataset`]: The immutable launch table and its site catalog
//! - [`projection`]: Pure functions computing chart data from a selection
//! - [`chart`]: Rendering-ready chart specifications
//! - [`dashboard`]: Page controls and their initial values
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use launch_dash::dataset::{Dataset, LaunchRecord, Outcome};
//! use launch_dash::projection::{compute_pie_data, compute_scatter_data, PayloadRange, SiteSelector};
//!
//! let dataset = Dataset::from_records(vec![
//!     LaunchRecord::new("A", 500.0, "FT", Outcome::Success),
//!     LaunchRecord::new("A", 9000.0, "B4", Outcome::Failure),
//!     LaunchRecord::new("B", 2000.0, "FT", Outcome::Success),
//! ]);
//!
//! let pie = compute_pie_data(&dataset, &SiteSelector::All);
//! assert_eq!(pie.total(), 2);
//!
//! let points = compute_scatter_data(&dataset, PayloadRange::new(0.0, 5000.0), &SiteSelector::All);
//! assert_eq!(points.len(), 2);
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;
pub mod projection;

pub use api::{build_router, serve, ApiError, AppState};
pub use chart::{PieChart, ScatterChart};
pub use config::{Config, ConfigError};
pub use dashboard::DashboardLayout;
pub use dataset::{distinct_sites, Dataset, DatasetError, LaunchRecord, Outcome};
pub use projection::{
    compute_pie_data, compute_scatter_data, PayloadRange, PieChartInput, ScatterChartInput,
    SiteSelector,
};
