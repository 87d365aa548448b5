//! Layout Routes
//!
//! - GET /api/v1/layout - Page heading, dropdown options and slider
//! - GET /api/v1/sites - Site catalog

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SitesResponse;
use crate::api::state::AppState;
use crate::dashboard::DashboardLayout;

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/sites
///
/// Distinct launch sites in first-occurrence order.
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let sites = state.sites.as_ref().clone();
    Json(SitesResponse {
        total: sites.len(),
        sites,
    })
}
