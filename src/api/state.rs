//! Application State
//!
//! Shared state accessible by all API handlers.
//! The dataset is read-only after startup, so handlers share it without locks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, DashboardConfig};
use crate::dashboard::DashboardLayout;
use crate::dataset::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records loaded at startup
    pub dataset: Arc<Dataset>,
    /// Site catalog, computed once from the dataset
    pub sites: Arc<Vec<String>>,
    /// Page controls derived from the dataset and dashboard config
    pub layout: Arc<DashboardLayout>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig, dashboard: &DashboardConfig) -> Self {
        let sites = dataset.sites();
        let layout = DashboardLayout::build(&dataset, &sites, dashboard);

        Self {
            dataset,
            sites: Arc::new(sites),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
