//! Domain layer - Core prediction logic and entities

pub mod error;
pub mod patient;
pub mod prediction;
pub mod report;

pub use error::DomainError;
pub use patient::{FeatureControl, PatientSample, FEATURE_CONTROLS, FEATURE_COUNT};
pub use prediction::{
    predict, Classifier, ModelRegistry, PredictionLabel, PredictionResult, RegisteredModel,
    ScaledSample, StandardScaler,
};
pub use report::{PredictionRecord, ResultPanel, RiskLevel, CSV_CONTENT_TYPE, CSV_FILENAME};
