//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;
use crate::domain::PredictionLabel;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("retinopathy_predictor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router<S>(metrics: PrometheusMetrics, path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record one completed prediction
pub fn record_prediction(model: &str, label: PredictionLabel, duration: Duration) {
    let labels = [
        ("model", model.to_string()),
        ("label", label_value(label).to_string()),
    ];

    counter!("predictions_total", &labels).increment(1);
    histogram!("prediction_duration_seconds", "model" => model.to_string())
        .record(duration.as_secs_f64());
}

fn label_value(label: PredictionLabel) -> &'static str {
    match label {
        PredictionLabel::NoRetinopathy => "no_retinopathy",
        PredictionLabel::Retinopathy => "retinopathy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_values() {
        assert_eq!(label_value(PredictionLabel::NoRetinopathy), "no_retinopathy");
        assert_eq!(label_value(PredictionLabel::Retinopathy), "retinopathy");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_http_request("GET", "/", 200, Duration::from_millis(3));
        record_prediction(
            "Logistic Regression",
            PredictionLabel::Retinopathy,
            Duration::from_micros(40),
        );
    }
}
