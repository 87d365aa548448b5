//! Chart Routes
//!
//! The page re-fetches these whenever one of their inputs changes:
//! the pie chart follows the site dropdown, the scatter chart follows both
//! the dropdown and the payload slider.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::{PieChart, ScatterChart};
use crate::projection::{compute_pie_data, compute_scatter_data, PayloadRange};

/// GET /api/v1/charts/pie
///
/// An unknown site is not an error; it renders an empty pie.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PieParams>, QueryRejection>,
) -> ApiResult<Json<PieChart>> {
    let Query(params) = query.map_err(invalid_query)?;
    let input = compute_pie_data(&state.dataset, &params.site);

    tracing::debug!(site = %params.site, slices = input.len(), "Computed pie chart");

    Ok(Json(PieChart::build(&input)))
}

/// GET /api/v1/charts/scatter
///
/// Missing or blank bounds fall back to the slider's initial selection.
/// Inverted ranges and unknown sites yield an empty chart.
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ScatterParams>, QueryRejection>,
) -> ApiResult<Json<ScatterChart>> {
    let Query(params) = query.map_err(invalid_query)?;
    let default_range = state.layout.payload_slider.value;
    let range = PayloadRange::new(
        params.low.unwrap_or(default_range.low),
        params.high.unwrap_or(default_range.high),
    );

    if !range.low.is_finite() || !range.high.is_finite() {
        return Err(ApiError::Validation(
            "low and high must be finite numbers".to_string(),
        ));
    }

    let points = compute_scatter_data(&state.dataset, range, &params.site);

    tracing::debug!(
        site = %params.site,
        low = range.low,
        high = range.high,
        points = points.len(),
        "Computed scatter chart"
    );

    Ok(Json(ScatterChart::build(&points, &params.site, range)))
}

fn invalid_query(rejection: QueryRejection) -> ApiError {
    ApiError::Validation(rejection.body_text())
}
