//! Health check endpoints for liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;
use crate::domain::FEATURE_COUNT;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check - verifies the loaded artifacts
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let checks = vec![check_models(&state), check_scaler(&state)];

    let overall_status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - the process is up
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_models(state: &AppState) -> HealthCheck {
    let names = state.prediction_service.model_names();

    if names.is_empty() {
        HealthCheck {
            name: "models".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some("No models registered".to_string()),
        }
    } else {
        HealthCheck {
            name: "models".to_string(),
            status: HealthStatus::Healthy,
            message: Some(names.join(", ")),
        }
    }
}

fn check_scaler(state: &AppState) -> HealthCheck {
    let n_features = state.prediction_service.scaler().n_features();
    let status = if n_features == FEATURE_COUNT {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    HealthCheck {
        name: "scaler".to_string(),
        status,
        message: Some(format!("{} features", n_features)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::fixed_state;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            checks: None,
            latency_ms: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(!json.contains("checks"));
    }

    #[test]
    fn test_artifact_checks() {
        let state = fixed_state(0, [0.8, 0.2]);

        let models = check_models(&state);
        assert_eq!(models.status, HealthStatus::Healthy);
        assert_eq!(models.message.as_deref(), Some("Logistic Regression"));

        let scaler = check_scaler(&state);
        assert_eq!(scaler.status, HealthStatus::Healthy);
        assert_eq!(scaler.message.as_deref(), Some("4 features"));
    }
}
