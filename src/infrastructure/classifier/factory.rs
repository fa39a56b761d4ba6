use std::sync::Arc;

use serde::Deserialize;

use super::logistic::{LogisticRegression, LogisticRegressionParams};
use crate::domain::{Classifier, DomainError};

/// Serialized classifier artifact, tagged by model family
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogisticRegressionParams),
}

impl ClassifierArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
        }
    }
}

/// Factory for creating classifiers from their artifacts
#[derive(Debug)]
pub struct ClassifierFactory;

impl ClassifierFactory {
    pub fn create(artifact: &ClassifierArtifact) -> Result<Arc<dyn Classifier>, DomainError> {
        match artifact {
            ClassifierArtifact::LogisticRegression(params) => {
                let model = LogisticRegression::from_params(params)?;
                Ok(Arc::new(model))
            }
        }
    }
}
