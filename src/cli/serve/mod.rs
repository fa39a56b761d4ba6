//! Serve command - web form, JSON API and metrics on one port

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::{create_metrics_router, init_metrics};

/// Run the prediction server until interrupted
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging);

    // Missing or malformed artifacts are fatal
    let service = crate::create_prediction_service(&config)?;
    info!(models = ?service.model_names(), "Artifacts loaded");

    let mut app = create_router(AppState::new(service));

    if let Some(metrics) = init_metrics(&config.metrics) {
        app = app.merge(create_metrics_router(metrics, &config.metrics.path));
    }

    let addr = build_socket_addr(&config)?;
    info!("Starting retinopathy predictor on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    let ip = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid server host '{}'", config.server.host))?;

    Ok(SocketAddr::from((ip, config.server.port)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
