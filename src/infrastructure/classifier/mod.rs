//! Concrete classifier implementations

mod factory;
mod logistic;

pub use factory::{ClassifierArtifact, ClassifierFactory};
pub use logistic::{LogisticRegression, LogisticRegressionParams};
