//! Page Route
//!
//! - GET / - The dashboard page. Its script wires the controls to the chart
//!   endpoints and redraws a chart whenever one of its inputs changes.

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
