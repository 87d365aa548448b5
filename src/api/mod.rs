//! Launch Dash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//!
//! ## Dashboard
//! - `GET /api/v1/layout` - Heading, site dropdown options, payload slider
//! - `GET /api/v1/sites` - Site catalog
//! - `GET /api/v1/charts/pie` - Pie chart for `?site=`
//! - `GET /api/v1/charts/scatter` - Scatter chart for `?site=&low=&high=`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::api::{serve, AppState};
//! use launch_dash::config::Config;
//! use launch_dash::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let dataset = Arc::new(Dataset::load(&config.dataset.path)?);
//!
//!     let state = AppState::new(dataset, config.api.clone(), &config.dashboard);
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        .route("/layout", get(routes::layout::get_layout))
        .route("/sites", get(routes::layout::list_sites))
        .route("/charts/pie", get(routes::charts::pie_chart))
        .route("/charts/scatter", get(routes::charts::scatter_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured, otherwise restricted to the list
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launch dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launch dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with(ApiConfig::default())
    }

    fn create_test_app_with(config: ApiConfig) -> Router {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 9000.0, "B4", Outcome::Failure),
            LaunchRecord::new("B", 2000.0, "FT", Outcome::Success),
        ]);

        let state = AppState::new(Arc::new(dataset), config, &DashboardConfig::default());
        build_router(state)
    }

    async fn get_with_origin(app: Router, origin: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .uri("/api/v1/sites")
                .header("origin", origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get_json(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 3);
        assert_eq!(body["successes"], 2);
        assert_eq!(body["sites"], 2);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, body) = get_json(create_test_app(), "/api/v1/layout").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["site_options"][0]["value"], "ALL");
        assert_eq!(body["site_options"][1]["value"], "A");
        assert_eq!(body["site_options"][2]["value"], "B");
        assert_eq!(body["default_site"], "ALL");
        assert_eq!(body["payload_slider"]["value"]["low"], 500.0);
        assert_eq!(body["payload_slider"]["value"]["high"], 9000.0);
    }

    #[tokio::test]
    async fn test_sites() {
        let (status, body) = get_json(create_test_app(), "/api/v1/sites").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["sites"], serde_json::json!(["A", "B"]));
    }

    #[tokio::test]
    async fn test_pie_all_sites_by_default() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/pie").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["site"], "ALL");
        assert_eq!(body["slices"][0]["label"], "A");
        assert_eq!(body["slices"][0]["value"], 1);
        assert_eq!(body["slices"][1]["label"], "B");
        assert_eq!(body["slices"][1]["value"], 1);
    }

    #[tokio::test]
    async fn test_pie_single_site() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/pie?site=A").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["site"], "A");
        assert_eq!(body["total"], 2);
        assert_eq!(body["slices"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pie_unknown_site_is_empty() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/pie?site=Nowhere").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["slices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scatter_with_range() {
        let (status, body) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?site=ALL&low=0&high=5000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["point_count"], 2);
        assert_eq!(body["series"][0]["category"], "FT");
        assert_eq!(
            body["series"][0]["points"],
            serde_json::json!([[500.0, 1.0], [2000.0, 1.0]])
        );
    }

    #[tokio::test]
    async fn test_scatter_defaults_to_observed_bounds() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/scatter").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["point_count"], 3);
        assert_eq!(body["range"]["low"], 500.0);
        assert_eq!(body["range"]["high"], 9000.0);
    }

    #[tokio::test]
    async fn test_scatter_inverted_range_is_empty() {
        let (status, body) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?low=5000&high=1000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["point_count"], 0);
    }

    #[tokio::test]
    async fn test_scatter_blank_bound_uses_default() {
        let (status, body) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?site=ALL&low=&high=9000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["range"]["low"], 500.0);
        assert_eq!(body["range"]["high"], 9000.0);
        assert_eq!(body["point_count"], 3);
    }

    #[tokio::test]
    async fn test_scatter_non_numeric_bound() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts/scatter?low=heavy").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_scatter_non_finite_bound() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/scatter?high=inf").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(create_test_app(), "/api/v1/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin() {
        let app = create_test_app_with(ApiConfig {
            cors_origins: vec!["http://localhost:8050".to_string()],
            ..Default::default()
        });

        let response = get_with_origin(app, "http://localhost:8050").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:8050"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_unlisted_origin() {
        let app = create_test_app_with(ApiConfig {
            cors_origins: vec!["http://localhost:8050".to_string()],
            ..Default::default()
        });

        let response = get_with_origin(app, "http://evil.example").await;

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_permissive_without_origins() {
        let response = get_with_origin(create_test_app(), "http://anywhere.example").await;

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
