//! Prediction service - scale, classify and package one patient sample

use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{
    predict, DomainError, ModelRegistry, PatientSample, PredictionRecord, PredictionResult,
    ResultPanel, StandardScaler,
};
use crate::infrastructure::artifacts::LoadedArtifacts;
use crate::infrastructure::observability::record_prediction;

/// A prediction together with the inputs that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub sample: PatientSample,
    pub result: PredictionResult,
}

impl Prediction {
    pub fn panel(&self) -> ResultPanel {
        ResultPanel::from_result(&self.result)
    }

    pub fn record(&self) -> PredictionRecord {
        PredictionRecord::new(&self.sample, &self.result)
    }
}

/// Immutable prediction pipeline built once at startup
#[derive(Debug, Clone)]
pub struct PredictionService {
    scaler: StandardScaler,
    registry: ModelRegistry,
}

impl PredictionService {
    pub fn new(scaler: StandardScaler, registry: ModelRegistry) -> Result<Self, DomainError> {
        if registry.is_empty() {
            return Err(DomainError::configuration(
                "Prediction service requires at least one registered model",
            ));
        }

        Ok(Self { scaler, registry })
    }

    pub fn from_artifacts(artifacts: LoadedArtifacts) -> Result<Self, DomainError> {
        Self::new(artifacts.scaler, artifacts.registry)
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Registered model names in selector order
    pub fn model_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn default_model_name(&self) -> &str {
        self.registry
            .default_model()
            .map(|m| m.name.as_str())
            .unwrap_or_default()
    }

    /// Validate the sample, then run it through the scaler and the selected model.
    ///
    /// `model` falls back to the first registered model when `None`.
    pub fn predict(
        &self,
        model: Option<&str>,
        sample: PatientSample,
    ) -> Result<Prediction, DomainError> {
        let sample = sample.validated()?;
        let model_name = model.unwrap_or_else(|| self.default_model_name());
        let registered = self.registry.require(model_name)?;

        let start = Instant::now();
        let scaled = self.scaler.transform(&sample);
        debug!(model = %registered.name, scaled = ?scaled.values(), "Scaled patient sample");

        let result = predict(&registered.name, registered.classifier.as_ref(), &scaled)?;
        let elapsed = start.elapsed();

        record_prediction(&registered.name, result.label, elapsed);

        info!(
            model = %result.model_name,
            prediction = %result.label,
            confidence = %result.confidence_text(),
            duration_us = %elapsed.as_micros(),
            "Prediction complete"
        );

        Ok(Prediction { sample, result })
    }
}
