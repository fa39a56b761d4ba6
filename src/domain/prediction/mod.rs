//! Prediction domain - scaling, classification and the model registry

mod classifier;
mod registry;
mod result;
mod scaler;

#[cfg(test)]
pub use classifier::MockClassifier;
pub use classifier::{predict, Classifier};
pub use registry::{ModelRegistry, RegisteredModel};
pub use result::{PredictionLabel, PredictionResult};
pub use scaler::{ScaledSample, StandardScaler};
