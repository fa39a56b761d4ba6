use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, security_headers_middleware, MAX_BODY_SIZE,
};
use super::predictions;
use super::state::AppState;
use super::web;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Browser form and CSV download
        .route("/", get(web::index))
        .route("/predict", post(web::submit))
        .route("/predict/csv", get(web::export_csv))
        // JSON API
        .route("/api/models", get(predictions::list_models))
        .route("/api/predict", post(predictions::create_prediction))
        .with_state(state)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
}
