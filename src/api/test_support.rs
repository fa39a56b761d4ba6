//! Shared fixtures for handler tests

use std::sync::Arc;

use super::state::AppState;
use crate::config::{ArtifactsConfig, ModelArtifactConfig};
use crate::domain::prediction::MockClassifier;
use crate::domain::{ModelRegistry, StandardScaler};
use crate::infrastructure::artifacts::load_artifacts;
use crate::infrastructure::services::PredictionService;

/// State whose only model always returns `class` with probabilities `proba`
pub fn fixed_state(class: usize, proba: [f64; 2]) -> AppState {
    let mut mock = MockClassifier::new();
    mock.expect_predict().returning(move |_| Ok(class));
    mock.expect_predict_proba().returning(move |_| Ok(proba));

    let registry = ModelRegistry::new()
        .with_model("Logistic Regression", Arc::new(mock))
        .expect("registry");
    let scaler = StandardScaler::new(&[0.0; 4], &[1.0; 4]).expect("scaler");

    AppState::new(PredictionService::new(scaler, registry).expect("service"))
}

/// State backed by the artifacts shipped under `models/`
pub fn bundled_state() -> AppState {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/models");
    let config = ArtifactsConfig {
        scaler_path: format!("{}/scaler.json", dir),
        models: vec![ModelArtifactConfig {
            name: "Logistic Regression".to_string(),
            path: format!("{}/logreg_model.json", dir),
        }],
    };

    let artifacts = load_artifacts(&config).expect("bundled artifacts");
    AppState::new(PredictionService::from_artifacts(artifacts).expect("service"))
}
