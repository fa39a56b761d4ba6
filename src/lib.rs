//! Diabetic Retinopathy Predictor
//!
//! Scores a patient's age, blood pressure and cholesterol with a
//! pre-trained classifier and presents the result as:
//! - a server-rendered web form with a styled result card
//! - a single-row CSV download
//! - a JSON API for programmatic clients

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use anyhow::Context;

use infrastructure::artifacts::load_artifacts;
use infrastructure::services::PredictionService;

/// Load the configured artifacts and build the prediction service
pub fn create_prediction_service(config: &AppConfig) -> anyhow::Result<PredictionService> {
    let artifacts = load_artifacts(&config.artifacts).context("Failed to load model artifacts")?;

    PredictionService::from_artifacts(artifacts).context("Failed to initialize prediction service")
}
