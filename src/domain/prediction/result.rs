//! Prediction labels and results

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Binary retinopathy outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionLabel {
    NoRetinopathy,
    Retinopathy,
}

impl PredictionLabel {
    /// Map a classifier class index onto a label
    pub fn from_class(class: usize) -> Result<Self, DomainError> {
        match class {
            0 => Ok(Self::NoRetinopathy),
            1 => Ok(Self::Retinopathy),
            other => Err(DomainError::prediction(format!(
                "Unknown class index {} for a binary classifier",
                other
            ))),
        }
    }

    pub fn class_index(&self) -> usize {
        match self {
            Self::NoRetinopathy => 0,
            Self::Retinopathy => 1,
        }
    }

    /// Display text used on the result panel and in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoRetinopathy => "No Retinopathy",
            Self::Retinopathy => "Retinopathy",
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Retinopathy)
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one prediction with the selected model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub model_name: String,
    pub label: PredictionLabel,
    /// Probability the classifier assigned to `label`
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(model_name: impl Into<String>, label: PredictionLabel, confidence: f64) -> Self {
        Self {
            model_name: model_name.into(),
            label,
            confidence,
        }
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Confidence as shown to users, two decimals without the percent sign
    pub fn confidence_text(&self) -> String {
        format!("{:.2}", self.confidence_percent())
    }
}
