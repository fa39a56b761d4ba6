//! Result panel - class-conditional presentation of a prediction

use serde::{Deserialize, Serialize};

use crate::domain::prediction::PredictionResult;

/// Visual treatment selected for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn for_result(result: &PredictionResult) -> Self {
        if result.label.is_positive() {
            Self::High
        } else {
            Self::Low
        }
    }

    /// CSS modifier class on the result card
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "result-card-high-risk",
            Self::Low => "result-card-low-risk",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::High => "⚠️",
            Self::Low => "✅",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Low => "Low Risk",
        }
    }
}

/// Display-ready lines of the result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    pub risk: RiskLevel,
    pub headline: String,
    pub confidence: String,
    pub model_used: String,
}

impl ResultPanel {
    pub fn from_result(result: &PredictionResult) -> Self {
        let risk = RiskLevel::for_result(result);

        Self {
            risk,
            headline: format!("{} {}: {}", risk.marker(), risk.title(), result.label),
            confidence: format!("Confidence: {}%", result.confidence_text()),
            model_used: format!("Model Used: {}", result.model_name),
        }
    }

    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        format!("{}\n{}\n{}", self.headline, self.confidence, self.model_used)
    }
}
