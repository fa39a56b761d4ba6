//! Prediction API request/response types

use serde::{Deserialize, Serialize};

use crate::domain::{PatientSample, PredictionLabel, RiskLevel};
use crate::infrastructure::services::Prediction;

/// POST /api/predict request body
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Registered model name; defaults to the first model
    #[serde(default)]
    pub model: Option<String>,
    pub age: u32,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub cholesterol: u32,
}

impl PredictRequest {
    pub fn sample(&self) -> PatientSample {
        PatientSample::new(self.age, self.systolic_bp, self.diastolic_bp, self.cholesterol)
    }
}

/// POST /api/predict response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub model: String,
    /// Predicted class index (0 or 1)
    pub prediction: usize,
    pub label: PredictionLabel,
    pub confidence: f64,
    /// Confidence percentage with two decimals, as shown on the result panel
    pub confidence_percent: String,
    pub risk: RiskLevel,
    pub input: PatientSample,
}

impl From<&Prediction> for PredictResponse {
    fn from(prediction: &Prediction) -> Self {
        let result = &prediction.result;

        Self {
            model: result.model_name.clone(),
            prediction: result.label.class_index(),
            label: result.label,
            confidence: result.confidence,
            confidence_percent: result.confidence_text(),
            risk: RiskLevel::for_result(result),
            input: prediction.sample,
        }
    }
}

/// A selectable model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub default: bool,
}

/// GET /api/models response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelInfo>,
}

impl ModelsResponse {
    pub fn new(data: Vec<ModelInfo>) -> Self {
        Self {
            object: "list".to_string(),
            data,
        }
    }
}
